use std::fmt;
use std::time::Duration;

use iced::Point;
use iced::task;

use super::model::{ArticleParamsConfig, OpenStateOwner};
use crate::article::{ArticleField, ArticleSettings};

/// Mount lifecycle of the sidebar panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SidebarPhase {
    /// Not open and not mounted.
    Closed,
    /// Open and mounted.
    Open,
    /// Logically closed but still mounted until the grace timer of
    /// `generation` fires.
    ClosingGrace { generation: u64 },
}

/// Outcome of a phase transition request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PhaseChange {
    Unchanged,
    Opened,
    Closing { generation: u64 },
    Hidden,
}

/// Draft settings and sidebar lifecycle for the article params widget.
pub(crate) struct ArticleParamsState {
    owner: OpenStateOwner,
    panel_width: f32,
    grace_period: Duration,
    applied: ArticleSettings,
    draft: ArticleSettings,
    phase: SidebarPhase,
    next_generation: u64,
    hide_timer: Option<task::Handle>,
    cursor: Option<Point>,
}

impl fmt::Debug for ArticleParamsState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArticleParamsState")
            .field("owner", &self.owner)
            .field("applied", &self.applied)
            .field("draft", &self.draft)
            .field("phase", &self.phase)
            .field("has_hide_timer", &self.hide_timer.is_some())
            .field("cursor", &self.cursor)
            .finish_non_exhaustive()
    }
}

impl ArticleParamsState {
    pub(crate) fn new(
        settings: ArticleSettings,
        config: ArticleParamsConfig,
    ) -> Self {
        Self {
            owner: config.owner,
            panel_width: config.panel_width,
            grace_period: config.grace_period,
            applied: settings,
            draft: settings,
            phase: SidebarPhase::Closed,
            next_generation: 0,
            hide_timer: None,
            cursor: None,
        }
    }

    pub(crate) fn owner(&self) -> OpenStateOwner {
        self.owner
    }

    pub(crate) fn panel_width(&self) -> f32 {
        self.panel_width
    }

    pub(crate) fn grace_period(&self) -> Duration {
        self.grace_period
    }

    /// Return the editable draft.
    pub(crate) fn draft(&self) -> &ArticleSettings {
        &self.draft
    }

    /// Return whether the draft differs from the applied settings.
    pub(crate) fn is_dirty(&self) -> bool {
        self.draft != self.applied
    }

    #[cfg(test)]
    pub(crate) fn phase(&self) -> SidebarPhase {
        self.phase
    }

    /// Return the logical open flag.
    pub(crate) fn is_open(&self) -> bool {
        matches!(self.phase, SidebarPhase::Open)
    }

    /// Return whether the panel is mounted (open or in its grace period).
    pub(crate) fn is_rendered(&self) -> bool {
        !matches!(self.phase, SidebarPhase::Closed)
    }

    /// Return whether a delayed unmount is scheduled.
    pub(crate) fn has_pending_hide(&self) -> bool {
        matches!(self.phase, SidebarPhase::ClosingGrace { .. })
    }

    #[cfg(test)]
    pub(crate) fn has_hide_timer(&self) -> bool {
        self.hide_timer.is_some()
    }

    #[cfg(test)]
    pub(crate) fn hide_timer(&self) -> Option<&task::Handle> {
        self.hide_timer.as_ref()
    }

    pub(crate) fn cursor(&self) -> Option<Point> {
        self.cursor
    }

    pub(crate) fn update_cursor(&mut self, position: Point) {
        self.cursor = Some(position);
    }

    /// Replace one field of the draft.
    pub(crate) fn edit(&mut self, field: ArticleField) {
        self.draft = self.draft.with_field(field);
    }

    /// Overwrite the draft with the default settings.
    pub(crate) fn reset_draft(&mut self) {
        self.draft = ArticleSettings::DEFAULT;
    }

    /// Adopt settings applied in the store, discarding the draft when they
    /// differ from what was last seen. Returns `true` on resync.
    pub(crate) fn sync_settings(&mut self, settings: ArticleSettings) -> bool {
        if self.applied == settings {
            return false;
        }

        self.applied = settings;
        self.draft = settings;
        true
    }

    pub(crate) fn open(&mut self) -> PhaseChange {
        match self.phase {
            SidebarPhase::Open => PhaseChange::Unchanged,
            SidebarPhase::Closed => {
                self.phase = SidebarPhase::Open;
                PhaseChange::Opened
            },
            SidebarPhase::ClosingGrace { .. } => {
                self.cancel_hide_timer();
                self.phase = SidebarPhase::Open;
                PhaseChange::Opened
            },
        }
    }

    pub(crate) fn close(&mut self) -> PhaseChange {
        if !self.is_open() {
            return PhaseChange::Unchanged;
        }

        let generation = self.next_generation;
        self.next_generation = self.next_generation.wrapping_add(1);
        self.phase = SidebarPhase::ClosingGrace { generation };
        PhaseChange::Closing { generation }
    }

    /// Unmount the panel if `generation` is the pending grace period.
    /// Timers from superseded closes are ignored.
    pub(crate) fn finish_grace(&mut self, generation: u64) -> PhaseChange {
        if self.phase != (SidebarPhase::ClosingGrace { generation }) {
            return PhaseChange::Unchanged;
        }

        self.hide_timer = None;
        self.phase = SidebarPhase::Closed;
        PhaseChange::Hidden
    }

    /// Keep the handle of the scheduled unmount. Any previous timer is
    /// aborted; dropping the state aborts the stored one.
    pub(crate) fn arm_hide_timer(&mut self, handle: task::Handle) {
        self.cancel_hide_timer();
        self.hide_timer = Some(handle.abort_on_drop());
    }

    fn cancel_hide_timer(&mut self) {
        if let Some(handle) = self.hide_timer.take() {
            handle.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use iced::Task;
    use iced::task;

    use super::{ArticleParamsState, PhaseChange, SidebarPhase};
    use crate::article::options::{FontColor, FontFamily};
    use crate::article::{ArticleField, ArticleSettings};
    use crate::widgets::article_params::model::{
        ArticleParamsConfig, OpenStateOwner,
    };

    fn state() -> ArticleParamsState {
        ArticleParamsState::new(
            ArticleSettings::DEFAULT,
            ArticleParamsConfig {
                owner: OpenStateOwner::Local,
                panel_width: 480.0,
                grace_period: Duration::from_millis(500),
            },
        )
    }

    #[test]
    fn given_new_state_then_sidebar_is_closed_and_unmounted() {
        let state = state();
        assert_eq!(state.phase(), SidebarPhase::Closed);
        assert!(!state.is_open());
        assert!(!state.is_rendered());
    }

    #[test]
    fn given_open_state_when_closed_then_stays_mounted_in_grace() {
        let mut state = state();
        assert_eq!(state.open(), PhaseChange::Opened);

        let change = state.close();

        assert_eq!(change, PhaseChange::Closing { generation: 0 });
        assert!(!state.is_open());
        assert!(state.is_rendered());
        assert!(state.has_pending_hide());
    }

    #[test]
    fn given_grace_period_when_matching_timer_fires_then_panel_unmounts() {
        let mut state = state();
        let _ = state.open();
        let _ = state.close();

        let change = state.finish_grace(0);

        assert_eq!(change, PhaseChange::Hidden);
        assert_eq!(state.phase(), SidebarPhase::Closed);
        assert!(!state.is_rendered());
    }

    #[test]
    fn given_reopen_during_grace_when_stale_timer_fires_then_stays_open() {
        let mut state = state();
        let _ = state.open();
        let _ = state.close();
        assert_eq!(state.open(), PhaseChange::Opened);

        let change = state.finish_grace(0);

        assert_eq!(change, PhaseChange::Unchanged);
        assert!(state.is_open());
        assert!(state.is_rendered());
    }

    #[test]
    fn given_second_close_when_first_timer_fires_then_it_is_ignored() {
        let mut state = state();
        let _ = state.open();
        let _ = state.close();
        let _ = state.open();
        assert_eq!(state.close(), PhaseChange::Closing { generation: 1 });

        assert_eq!(state.finish_grace(0), PhaseChange::Unchanged);
        assert!(state.is_rendered());
        assert_eq!(state.finish_grace(1), PhaseChange::Hidden);
    }

    fn timer_handle() -> task::Handle {
        let (_task, handle) = Task::<()>::none().abortable();
        handle
    }

    #[test]
    fn given_armed_timer_when_rearmed_then_previous_handle_is_aborted() {
        let mut state = state();
        let first = timer_handle();
        let second = timer_handle();
        state.arm_hide_timer(first.clone());

        state.arm_hide_timer(second.clone());

        assert!(first.is_aborted());
        assert!(!second.is_aborted());
        assert!(state.has_hide_timer());
    }

    #[test]
    fn given_grace_timer_when_reopened_then_timer_is_aborted() {
        let mut state = state();
        let _ = state.open();
        let _ = state.close();
        let timer = timer_handle();
        state.arm_hide_timer(timer.clone());

        assert_eq!(state.open(), PhaseChange::Opened);

        assert!(timer.is_aborted());
        assert!(!state.has_hide_timer());
    }

    #[test]
    fn given_grace_timer_when_state_dropped_then_timer_is_aborted() {
        let mut state = state();
        let _ = state.open();
        let _ = state.close();
        let timer = timer_handle();
        state.arm_hide_timer(timer.clone());

        drop(state);

        assert!(timer.is_aborted());
    }

    #[test]
    fn given_closed_state_when_closed_again_then_nothing_changes() {
        let mut state = state();
        assert_eq!(state.close(), PhaseChange::Unchanged);
        assert_eq!(state.phase(), SidebarPhase::Closed);
    }

    #[test]
    fn given_edits_when_store_changes_then_draft_is_resynced() {
        let mut state = state();
        state.edit(ArticleField::FontColor(FontColor::Blue));
        assert!(state.is_dirty());
        let external = ArticleSettings::DEFAULT
            .with_field(ArticleField::FontFamily(FontFamily::Merriweather));

        assert!(state.sync_settings(external));

        assert_eq!(state.draft(), &external);
        assert!(!state.is_dirty());
    }

    #[test]
    fn given_edits_when_same_settings_synced_then_draft_is_kept() {
        let mut state = state();
        state.edit(ArticleField::FontColor(FontColor::Blue));

        assert!(!state.sync_settings(ArticleSettings::DEFAULT));

        assert_eq!(state.draft().font_color, FontColor::Blue);
    }

    #[test]
    fn given_edits_when_draft_reset_then_draft_is_default() {
        let mut state = state();
        state.edit(ArticleField::FontFamily(FontFamily::Ubuntu));

        state.reset_draft();

        assert_eq!(state.draft(), &ArticleSettings::DEFAULT);
    }
}
