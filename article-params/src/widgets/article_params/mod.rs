pub(crate) mod event;
pub(crate) mod model;
pub(crate) mod reducer;
pub(crate) mod state;
mod subscription;
pub(crate) mod view;

use iced::{Subscription, Task};

pub(crate) use self::event::{
    ArticleParamsEffect, ArticleParamsEvent, ArticleParamsIntent,
};
pub(crate) use self::model::{ArticleParamsConfig, OpenStateOwner};
use self::model::ArticleParamsViewModel;
pub(crate) use self::reducer::ArticleParamsCtx;
use self::state::ArticleParamsState;
use crate::article::ArticleSettings;

/// Article params widget: the sliding settings sidebar with its toggle,
/// draft form and outside-press dismissal.
pub(crate) struct ArticleParamsWidget {
    state: ArticleParamsState,
}

impl ArticleParamsWidget {
    /// Create the widget with a draft seeded from the applied settings.
    pub(crate) fn new(
        settings: ArticleSettings,
        config: ArticleParamsConfig,
    ) -> Self {
        Self {
            state: ArticleParamsState::new(settings, config),
        }
    }

    /// Reduce an intent event into state updates and effects.
    pub(crate) fn reduce(
        &mut self,
        intent: ArticleParamsIntent,
        ctx: &ArticleParamsCtx,
    ) -> Task<ArticleParamsEvent> {
        reducer::reduce(&mut self.state, intent, ctx)
    }

    /// Return a read-only view model for the sidebar.
    pub(crate) fn vm(&self) -> ArticleParamsViewModel {
        ArticleParamsViewModel {
            draft: *self.state.draft(),
            is_open: self.state.is_open(),
            is_rendered: self.state.is_rendered(),
            is_closing: self.state.has_pending_hide(),
            is_dirty: self.state.is_dirty(),
            panel_width: self.state.panel_width(),
        }
    }

    /// Return the logical open flag.
    pub(crate) fn is_open(&self) -> bool {
        self.state.is_open()
    }

    /// Return the outside-press listener, active only while open.
    pub(crate) fn subscription(&self) -> Subscription<ArticleParamsEvent> {
        subscription::subscription(self.is_open())
    }

    /// Reduce an intent without spawning tasks.
    #[cfg(test)]
    pub(crate) fn reduce_intent(
        &mut self,
        intent: ArticleParamsIntent,
        ctx: &ArticleParamsCtx,
    ) -> reducer::Reduction {
        reducer::reduce_intent(&mut self.state, intent, ctx)
    }
}
