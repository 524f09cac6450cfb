//! View model computation.
//!
//! [`AppState::compute_viewmodel`] turns the current state into an immutable
//! [`UIViewModel`]. All derived booleans are resolved here, against the one
//! engagement store, which is what keeps the feed, post detail, search and
//! profile views in agreement at every instant.

use super::filters::highlight_ranges;
use super::modes::{InputMode, NavTab, Overlay, PostAction, ProfileTab, SearchTab, TextTarget, View};
use super::state::{AppState, RowTarget};
use crate::domain::{age_label, format_count, NotificationFilter, Post, SettingKind};
use crate::engagement::EntityKind;
use crate::ui::helpers::truncate_chars;
use crate::ui::viewmodel::{
    BannerLine, BannerStyle, DisplayItem, EmptyState, FooterInfo, HeaderInfo, Marker, NavItem,
    OverlayInfo, SearchBarInfo, TabItem, UIViewModel,
};

/// Rows taken by the header, nav bar, border and footer.
const CHROME_ROWS: usize = 6;

/// Rows taken by the bordered input box.
const SEARCH_BAR_ROWS: usize = 3;

/// Each list row renders as a title line and a detail line.
const LINES_PER_ITEM: usize = 2;

/// Columns reserved for markers and metadata beside the title.
const TITLE_RESERVED_COLS: usize = 24;

impl AppState {
    /// Computes a renderable view model for a terminal of `rows` x `cols`.
    ///
    /// # Windowing
    ///
    /// 1. Subtract chrome (header, nav, input box, tab bar, banner, footer)
    /// 2. Centre the window on the selected row
    /// 3. Shift the window back when it runs past the end
    /// 4. Report the selection relative to the window
    ///
    /// # Example
    ///
    /// ```
    /// use neonfeed::app::AppState;
    /// use neonfeed::dataset::Dataset;
    /// use neonfeed::ui::Theme;
    ///
    /// let state = AppState::new(Dataset::builtin().unwrap(), Theme::default());
    /// let vm = state.compute_viewmodel(40, 100);
    /// assert_eq!(vm.display_items[0].title, "Alex Johnson @alexjohnson");
    /// ```
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> UIViewModel {
        let _span = tracing::debug_span!("compute_viewmodel", view = ?self.view, rows, cols).entered();

        let search_bar = self.compute_search_bar();
        let tabs = self.compute_tabs();
        let banner = self.compute_banner(cols);

        let mut chrome = CHROME_ROWS + banner.len();
        if search_bar.is_some() {
            chrome += SEARCH_BAR_ROWS;
        }
        if tabs.is_some() {
            chrome += 1;
        }
        let available = (rows.saturating_sub(chrome) / LINES_PER_ITEM).max(1);

        let targets = self.rows();
        let total = targets.len();

        let selected = self.selected_index.min(total.saturating_sub(1));
        let mut visible_start = selected.saturating_sub(available / 2);
        let visible_end = (visible_start + available).min(total);
        visible_start = visible_start.min(visible_end);
        if visible_end - visible_start < available && total >= available {
            visible_start = visible_end.saturating_sub(available);
        }

        let display_items: Vec<DisplayItem> = targets[visible_start..visible_end]
            .iter()
            .enumerate()
            .filter_map(|(offset, target)| {
                let is_selected = visible_start + offset == selected;
                self.compute_display_item(target, is_selected, cols)
            })
            .collect();

        let empty_state = if total == 0 { self.compute_empty_state() } else { None };

        UIViewModel {
            header: self.compute_header(),
            nav: self.compute_nav(),
            search_bar,
            tabs,
            banner,
            display_items,
            selected_index: selected.saturating_sub(visible_start),
            empty_state,
            overlay: self.compute_overlay(),
            footer: self.compute_footer(),
        }
    }

    /// Active query for match highlighting on the current view.
    fn highlight_query(&self) -> Option<&str> {
        let query = match self.view {
            View::Search => self.search_query.trim(),
            View::Messages => self.message_query.trim(),
            _ => return None,
        };
        (!query.is_empty()).then(|| query.trim_start_matches('#'))
    }

    fn post_meta(&self, post: &Post) -> String {
        let likes = self.store.displayed_count(EntityKind::Like, post.id, post.likes);
        format!(
            "♥ {}  ✎ {}  {}",
            format_count(likes),
            format_count(self.comment_count(post)),
            age_label(post.age_secs, self.mounted_at)
        )
    }

    fn post_markers(&self, post: &Post) -> Vec<Marker> {
        let mut markers = Vec::new();
        if self.store.is_on(EntityKind::Like, post.id) {
            markers.push(Marker::Liked);
        }
        if self.store.is_on(EntityKind::Save, post.id) {
            markers.push(Marker::Saved);
        }
        if post.sensitive {
            markers.push(Marker::Sensitive);
        }
        markers
    }

    #[allow(clippy::too_many_lines)]
    fn compute_display_item(&self, target: &RowTarget, is_selected: bool, cols: usize) -> Option<DisplayItem> {
        let detail_width = cols.saturating_sub(6);
        let title_width = cols.saturating_sub(TITLE_RESERVED_COLS);

        let mut item = match target {
            RowTarget::Post(id) => {
                let post = self.dataset.post(*id)?;
                let detail = if post.sensitive && !self.setting(crate::domain::SHOW_SENSITIVE) {
                    "Sensitive content. Open to view.".to_string()
                } else {
                    post.content.clone()
                };
                DisplayItem {
                    title: format!("{} @{}", post.author, post.username),
                    detail,
                    meta: self.post_meta(post),
                    markers: self.post_markers(post),
                    is_selected,
                    is_emphasized: false,
                    highlight_ranges: vec![],
                }
            }
            RowTarget::Person(id) => {
                let person = self.dataset.person(*id)?;
                let following = self.store.is_on(EntityKind::Follow, person.id);
                DisplayItem {
                    title: person.name.clone(),
                    detail: if person.role.is_empty() {
                        format!("@{}", person.username)
                    } else {
                        format!("@{} · {}", person.username, person.role)
                    },
                    meta: (if following { "Following" } else { "Follow" }).to_string(),
                    markers: if following { vec![Marker::Following] } else { vec![] },
                    is_selected,
                    is_emphasized: false,
                    highlight_ranges: vec![],
                }
            }
            RowTarget::Tag(tag) => {
                let trending = self.dataset.tags.iter().find(|t| &t.tag == tag)?;
                DisplayItem {
                    title: format!("#{}", trending.tag),
                    detail: format!("{} posts", format_count(trending.posts)),
                    meta: String::new(),
                    markers: vec![],
                    is_selected,
                    is_emphasized: false,
                    highlight_ranges: vec![],
                }
            }
            RowTarget::Notification(id) => {
                let n = self.store.notification(*id)?;
                let unread = !self.store.is_on(EntityKind::Read, n.id);
                let mut markers = vec![Marker::Category(n.category)];
                if unread {
                    markers.insert(0, Marker::Unread);
                }
                let mut detail = n.action.clone();
                if let Some(preview) = &n.preview {
                    detail = format!("{detail}: \"{preview}\"");
                }
                if n.follow_request {
                    markers.push(Marker::FollowRequest);
                    detail.push_str("  Accept · Decline");
                }
                DisplayItem {
                    title: n.name.clone(),
                    detail,
                    meta: age_label(n.age_secs, self.mounted_at),
                    markers,
                    is_selected,
                    is_emphasized: unread,
                    highlight_ranges: vec![],
                }
            }
            RowTarget::Conversation(id) => {
                let c = self.dataset.conversation(*id)?;
                let age = age_label(c.age_secs, self.mounted_at);
                DisplayItem {
                    title: c.name.clone(),
                    detail: c.last_message.clone(),
                    meta: if c.unread > 0 { format!("{age}  ({})", c.unread) } else { age },
                    markers: if c.online { vec![Marker::Online] } else { vec![] },
                    is_selected,
                    is_emphasized: self.open_conversation == Some(c.id) || c.unread > 0,
                    highlight_ranges: vec![],
                }
            }
            RowTarget::Comment(id) => {
                let c = self
                    .dataset
                    .comments
                    .iter()
                    .chain(self.local_comments.iter())
                    .find(|c| c.id == *id)?;
                DisplayItem {
                    title: format!("{} @{}", c.author, c.username),
                    detail: c.content.clone(),
                    meta: format!("♥ {}  {}", c.likes, age_label(c.age_secs, self.mounted_at)),
                    markers: vec![],
                    is_selected,
                    is_emphasized: self.is_current_user(&c.username),
                    highlight_ranges: vec![],
                }
            }
            RowTarget::Setting(id) => {
                let def = self.setting_defs().find(|d| &d.id == id)?;
                let marker = match def.kind {
                    SettingKind::Toggle { .. } if self.setting(&def.id) => Marker::On,
                    SettingKind::Toggle { .. } => Marker::Off,
                    SettingKind::Link { .. } => Marker::Link,
                };
                DisplayItem {
                    title: def.label.clone(),
                    detail: def.description.clone().unwrap_or_default(),
                    meta: String::new(),
                    markers: vec![marker],
                    is_selected,
                    is_emphasized: false,
                    highlight_ranges: vec![],
                }
            }
        };

        item.title = truncate_chars(&item.title, title_width);
        item.detail = truncate_chars(&item.detail, detail_width);
        if let Some(query) = self.highlight_query() {
            item.highlight_ranges = highlight_ranges(&item.title, query);
        }
        Some(item)
    }

    fn compute_header(&self) -> HeaderInfo {
        let subtitle = match self.view {
            View::Notifications => {
                let unread = self.store.unread_count();
                (unread > 0).then(|| {
                    let plural = if unread == 1 { "" } else { "s" };
                    format!("You have {unread} unread notification{plural}")
                })
            }
            View::Messages => {
                let unread: u32 = self.dataset.conversations.iter().map(|c| c.unread).sum();
                (unread > 0).then(|| format!("{unread} unread messages"))
            }
            _ => None,
        };

        HeaderInfo {
            title: format!(" neonfeed · {} ", self.view.title()),
            subtitle,
        }
    }

    fn compute_nav(&self) -> Vec<NavItem> {
        let active = self.view.nav_tab();
        let unread_messages: usize = self
            .dataset
            .conversations
            .iter()
            .map(|c| c.unread as usize)
            .sum();

        NavTab::ALL
            .iter()
            .zip('1'..='6')
            .map(|(tab, key)| {
                let badge = match tab {
                    NavTab::Notifications => Some(self.store.unread_count()),
                    NavTab::Messages => Some(unread_messages),
                    _ => None,
                }
                .filter(|n| *n > 0);
                NavItem {
                    label: tab.label().to_string(),
                    key,
                    is_active: active == Some(*tab),
                    badge,
                }
            })
            .collect()
    }

    fn compute_search_bar(&self) -> Option<SearchBarInfo> {
        let (prompt, query, target) = match self.view {
            View::Search => ("Search", &self.search_query, TextTarget::SearchQuery),
            View::Messages => ("Filter", &self.message_query, TextTarget::MessageQuery),
            View::Post(_) => ("Comment", &self.comment_draft, TextTarget::CommentDraft),
            _ => return None,
        };
        Some(SearchBarInfo {
            prompt: prompt.to_string(),
            query: query.clone(),
            is_focused: self.input_mode == InputMode::Typing(target),
        })
    }

    fn compute_tabs(&self) -> Option<Vec<TabItem>> {
        fn items<T: Copy + PartialEq>(all: &[T], active: T, label: impl Fn(T) -> &'static str) -> Vec<TabItem> {
            all.iter()
                .map(|t| TabItem {
                    label: label(*t).to_string(),
                    is_active: *t == active,
                })
                .collect()
        }

        match self.view {
            View::Search => Some(items(&SearchTab::ALL, self.search_tab, SearchTab::label)),
            View::Notifications => Some(items(
                &NotificationFilter::ALL,
                self.notification_filter,
                NotificationFilter::label,
            )),
            View::Profile(_) => Some(items(&ProfileTab::ALL, self.profile_tab, ProfileTab::label)),
            _ => None,
        }
    }

    fn compute_banner(&self, cols: usize) -> Vec<BannerLine> {
        let width = cols.saturating_sub(4);
        let line = |text: String, style| BannerLine::new(truncate_chars(&text, width), style);

        match &self.view {
            View::Home => {
                let stories: Vec<String> = self
                    .dataset
                    .stories
                    .iter()
                    .map(|s| {
                        let ring = if s.is_yours {
                            "+"
                        } else if s.has_new {
                            "●"
                        } else {
                            "○"
                        };
                        format!("{ring} {}", s.name)
                    })
                    .collect();
                if stories.is_empty() {
                    vec![]
                } else {
                    vec![line(format!("Stories  {}", stories.join("   ")), BannerStyle::Accent)]
                }
            }
            View::Messages => {
                let online: Vec<&str> = self
                    .dataset
                    .conversations
                    .iter()
                    .filter(|c| c.online)
                    .map(|c| c.name.as_str())
                    .collect();
                let mut lines = vec![line(format!("Online  {}", online.join(", ")), BannerStyle::Success)];
                if let Some(c) = self.open_conversation.and_then(|id| self.dataset.conversation(id)) {
                    lines.push(line(format!("▸ {}: {}", c.name, c.last_message), BannerStyle::Accent));
                }
                lines
            }
            View::Profile(_) => self.compute_profile_banner(width),
            View::Post(id) => {
                let Some(post) = self.dataset.post(*id) else {
                    return vec![line(format!("Post {id} not found"), BannerStyle::Warning)];
                };
                let mut status = self.post_meta(post);
                if self.store.is_on(EntityKind::Like, post.id) {
                    status.push_str("  · liked");
                }
                if self.store.is_on(EntityKind::Save, post.id) {
                    status.push_str("  · saved");
                }
                vec![
                    line(format!("{} @{}", post.author, post.username), BannerStyle::Accent),
                    line(post.content.clone(), BannerStyle::Plain),
                    line(status, BannerStyle::Muted),
                ]
            }
            View::ContentWarning(_) => vec![
                line("⚠ Sensitive content".to_string(), BannerStyle::Warning),
                line(
                    "This post may contain content that some people find sensitive.".to_string(),
                    BannerStyle::Plain,
                ),
                line(
                    "You can change your content preferences in Settings (p).".to_string(),
                    BannerStyle::Muted,
                ),
                line("Enter: see post   Esc: go back".to_string(), BannerStyle::Muted),
            ],
            View::Settings if self.settings_saved => {
                vec![line("✓ Saved!".to_string(), BannerStyle::Success)]
            }
            _ => vec![],
        }
    }

    fn compute_profile_banner(&self, width: usize) -> Vec<BannerLine> {
        let Some(handle) = self.profile_handle() else {
            return vec![];
        };
        let Some(person) = self.dataset.person_by_username(handle) else {
            return vec![BannerLine::new(format!("@{handle} not found"), BannerStyle::Warning)];
        };

        let own = self.is_current_user(handle);
        let following = self.store.is_on(EntityKind::Follow, person.id);
        let followers = if own {
            person.followers
        } else {
            self.store.displayed_count(EntityKind::Follow, person.id, person.followers)
        };

        let mut name_line = format!("{} @{}", person.name, person.username);
        if !own {
            name_line.push_str(if following { "  [Following]" } else { "  [Follow]" });
        }

        let mut lines = vec![BannerLine::new(truncate_chars(&name_line, width), BannerStyle::Accent)];
        if !person.bio.is_empty() {
            lines.push(BannerLine::new(truncate_chars(&person.bio, width), BannerStyle::Plain));
        }
        lines.push(BannerLine::new(
            format!(
                "{} followers  ·  {} following  ·  {} posts",
                format_count(followers),
                format_count(person.following),
                format_count(person.posts)
            ),
            BannerStyle::Muted,
        ));
        lines
    }

    fn compute_empty_state(&self) -> Option<EmptyState> {
        let (message, subtitle) = match &self.view {
            View::Home => ("No posts yet", "Follow people to fill your feed"),
            View::Search => ("No results found", "Try a different search"),
            View::Notifications => ("No notifications found", "Try another filter"),
            View::Messages => ("No conversations found", "Try a different name"),
            View::Profile(_) => match self.profile_tab {
                ProfileTab::Posts => ("No posts yet", ""),
                ProfileTab::Saved if self.profile_handle().is_some_and(|h| self.is_current_user(h)) => {
                    ("No saved posts", "Press s on a post to save it")
                }
                ProfileTab::Saved => ("Saved posts are private", ""),
                ProfileTab::Tagged => ("No tagged posts", ""),
            },
            View::Post(_) => ("No comments yet", "Press c to add one"),
            View::Settings | View::ContentWarning(_) => return None,
        };
        Some(EmptyState {
            message: message.to_string(),
            subtitle: subtitle.to_string(),
        })
    }

    fn compute_overlay(&self) -> Option<OverlayInfo> {
        let Overlay::PostActions { post_id, selected } = self.overlay?;
        let post = self.dataset.post(post_id)?;
        let liked = self.store.is_on(EntityKind::Like, post_id);
        let saved = self.store.is_on(EntityKind::Save, post_id);

        let entries = PostAction::ALL
            .iter()
            .map(|action| {
                match action {
                    PostAction::ViewPost => "View post",
                    PostAction::ViewProfile => "View profile",
                    PostAction::Like if liked => "Unlike",
                    PostAction::Like => "Like",
                    PostAction::Save if saved => "Unsave",
                    PostAction::Save => "Save",
                    PostAction::Close => "Close",
                }
                .to_string()
            })
            .collect();

        Some(OverlayInfo {
            title: format!("Post by {}", post.author),
            entries,
            selected,
        })
    }

    fn compute_footer(&self) -> FooterInfo {
        let keybindings = if self.overlay.is_some() {
            "j/k: move  Enter: choose  l: like  s: save  Esc: close"
        } else {
            match (self.input_mode, &self.view) {
                (InputMode::Typing(TextTarget::CommentDraft), _) => "Type a comment  Enter: post  Esc: cancel",
                (InputMode::Typing(_), _) => "Type to filter  Enter: results  Esc: done",
                (InputMode::Normal, View::Home) => {
                    "1-6: tabs  j/k: move  Enter: open  l: like  s: save  a: actions  /: search  q: quit"
                }
                (InputMode::Normal, View::Search) => {
                    "/: type  Tab: next tab  j/k: move  Enter: open  f: follow  l: like  s: save  Esc: back"
                }
                (InputMode::Normal, View::Notifications) => {
                    "Tab: filter  j/k: move  Enter: open  r: mark read  R: mark all read  f: follow back"
                }
                (InputMode::Normal, View::Messages) => "/: filter  j/k: move  Enter: open conversation  Esc: close",
                (InputMode::Normal, View::Profile(_)) => {
                    "Tab: posts/saved/tagged  f: follow  Enter: open  l: like  s: save  Esc: back"
                }
                (InputMode::Normal, View::Settings) => "j/k: move  Space: toggle  Enter: open  w: save  Esc: back",
                (InputMode::Normal, View::Post(_)) => "l: like  s: save  c: comment  Enter: commenter profile  Esc: back",
                (InputMode::Normal, View::ContentWarning(_)) => "Enter: see post  p: settings  Esc: go back",
            }
        };
        FooterInfo {
            keybindings: keybindings.to_string(),
        }
    }
}
