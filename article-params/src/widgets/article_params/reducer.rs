use iced::{Point, Size, Task};

use super::event::{
    ArticleParamsEffect, ArticleParamsEvent, ArticleParamsIntent,
};
use super::model::{OpenStateOwner, PointerTarget, SidebarGeometry};
use super::state::{ArticleParamsState, PhaseChange};
use crate::article::ArticleSettings;

/// Read-only context for article params reduction.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ArticleParamsCtx {
    pub(crate) window_size: Size,
}

/// Effects and timer requests produced by one intent.
#[derive(Debug, Default, PartialEq, Eq)]
pub(crate) struct Reduction {
    pub(crate) effects: Vec<ArticleParamsEffect>,
    pub(crate) hide_after: Option<u64>,
}

impl Reduction {
    fn effect(effect: ArticleParamsEffect) -> Self {
        Self {
            effects: vec![effect],
            hide_after: None,
        }
    }
}

/// Reduce an intent into state updates, effect events and the delayed
/// unmount task.
pub(crate) fn reduce(
    state: &mut ArticleParamsState,
    intent: ArticleParamsIntent,
    ctx: &ArticleParamsCtx,
) -> Task<ArticleParamsEvent> {
    let reduction = reduce_intent(state, intent, ctx);

    let mut tasks: Vec<Task<ArticleParamsEvent>> = reduction
        .effects
        .into_iter()
        .map(|effect| Task::done(ArticleParamsEvent::Effect(effect)))
        .collect();

    if let Some(generation) = reduction.hide_after {
        tasks.push(schedule_hide(state, generation));
    }

    Task::batch(tasks)
}

/// Reduce an intent into state updates and a description of what has to
/// happen outside the state.
pub(crate) fn reduce_intent(
    state: &mut ArticleParamsState,
    intent: ArticleParamsIntent,
    ctx: &ArticleParamsCtx,
) -> Reduction {
    match intent {
        ArticleParamsIntent::TogglePressed => toggle(state),
        ArticleParamsIntent::PointerPressed { position } => {
            pointer_pressed(state, position, ctx)
        },
        ArticleParamsIntent::CursorMoved { position } => {
            state.update_cursor(position);
            Reduction::default()
        },
        ArticleParamsIntent::FieldChanged(field) => {
            log::debug!("article params draft changed: {}", field.key());
            state.edit(field);
            Reduction::default()
        },
        ArticleParamsIntent::Submit => {
            Reduction::effect(ArticleParamsEffect::Apply(*state.draft()))
        },
        ArticleParamsIntent::Reset => {
            state.reset_draft();
            Reduction::effect(ArticleParamsEffect::Apply(
                ArticleSettings::DEFAULT,
            ))
        },
        ArticleParamsIntent::SyncOpen(open) => set_open(state, open),
        ArticleParamsIntent::SyncSettings(settings) => {
            if state.sync_settings(settings) {
                log::debug!("article params draft resynced from store");
            }
            Reduction::default()
        },
        ArticleParamsIntent::GraceElapsed { generation } => {
            if state.finish_grace(generation) == PhaseChange::Hidden {
                log::debug!("article params sidebar unmounted");
            }
            Reduction::default()
        },
    }
}

fn toggle(state: &mut ArticleParamsState) -> Reduction {
    match state.owner() {
        OpenStateOwner::Local => set_open(state, !state.is_open()),
        OpenStateOwner::Host if state.is_open() => {
            Reduction::effect(ArticleParamsEffect::RequestClose)
        },
        OpenStateOwner::Host => {
            Reduction::effect(ArticleParamsEffect::RequestOpen)
        },
    }
}

fn request_close(state: &mut ArticleParamsState) -> Reduction {
    match state.owner() {
        OpenStateOwner::Local => set_open(state, false),
        OpenStateOwner::Host => {
            Reduction::effect(ArticleParamsEffect::RequestClose)
        },
    }
}

fn set_open(state: &mut ArticleParamsState, open: bool) -> Reduction {
    let change = if open { state.open() } else { state.close() };

    match change {
        PhaseChange::Closing { generation } => Reduction {
            effects: Vec::new(),
            hide_after: Some(generation),
        },
        PhaseChange::Opened => {
            log::debug!("article params sidebar opened");
            Reduction::default()
        },
        PhaseChange::Unchanged | PhaseChange::Hidden => Reduction::default(),
    }
}

fn pointer_pressed(
    state: &mut ArticleParamsState,
    position: Option<Point>,
    ctx: &ArticleParamsCtx,
) -> Reduction {
    if !state.is_open() {
        return Reduction::default();
    }

    let Some(position) = position.or(state.cursor()) else {
        return Reduction::default();
    };

    let geometry = SidebarGeometry::new(ctx.window_size, state.panel_width());
    match geometry.hit_test(position, state.is_rendered()) {
        PointerTarget::Outside => {
            log::debug!("press outside article params at {position:?}");
            request_close(state)
        },
        PointerTarget::Panel | PointerTarget::Toggle => Reduction::default(),
    }
}

/// Spawn the abortable sleep that ends the grace period of `generation`.
fn schedule_hide(
    state: &mut ArticleParamsState,
    generation: u64,
) -> Task<ArticleParamsEvent> {
    let grace_period = state.grace_period();
    let (task, handle) = Task::perform(
        async move { tokio::time::sleep(grace_period).await },
        move |()| {
            ArticleParamsEvent::Intent(ArticleParamsIntent::GraceElapsed {
                generation,
            })
        },
    )
    .abortable();

    state.arm_hide_timer(handle);
    task
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use iced::{Point, Size, Task};

    use super::{ArticleParamsCtx, Reduction, reduce, reduce_intent};
    use crate::article::options::{
        BackgroundColor, ContentWidth, FontColor, FontFamily, FontSize,
    };
    use crate::article::{ArticleField, ArticleSettings};
    use crate::widgets::article_params::event::{
        ArticleParamsEffect, ArticleParamsEvent, ArticleParamsIntent,
    };
    use crate::widgets::article_params::model::{
        ArticleParamsConfig, OpenStateOwner,
    };
    use crate::widgets::article_params::state::{
        ArticleParamsState, SidebarPhase,
    };

    const CTX: ArticleParamsCtx = ArticleParamsCtx {
        window_size: Size::new(1280.0, 800.0),
    };
    const INSIDE: Point = Point::new(120.0, 300.0);
    const OUTSIDE: Point = Point::new(1000.0, 300.0);

    fn state(owner: OpenStateOwner) -> ArticleParamsState {
        ArticleParamsState::new(
            ArticleSettings::DEFAULT,
            ArticleParamsConfig {
                owner,
                panel_width: 480.0,
                grace_period: Duration::from_millis(500),
            },
        )
    }

    fn run(
        state: &mut ArticleParamsState,
        intent: ArticleParamsIntent,
    ) -> Reduction {
        reduce_intent(state, intent, &CTX)
    }

    fn spawn(
        state: &mut ArticleParamsState,
        intent: ArticleParamsIntent,
    ) -> Task<ArticleParamsEvent> {
        reduce(state, intent, &CTX)
    }

    fn press(state: &mut ArticleParamsState, at: Option<Point>) -> Reduction {
        run(state, ArticleParamsIntent::PointerPressed { position: at })
    }

    fn toggle_center(is_rendered: bool) -> Point {
        let left = if is_rendered { 480.0 } else { 0.0 };
        Point::new(left + 16.0 + 24.0, 16.0 + 24.0)
    }

    fn apply_effect(reduction: &Reduction) -> Option<ArticleSettings> {
        reduction.effects.iter().find_map(|effect| match effect {
            ArticleParamsEffect::Apply(settings) => Some(*settings),
            _ => None,
        })
    }

    #[test]
    fn given_edits_when_reset_then_commits_exact_default() {
        let mut state = state(OpenStateOwner::Local);
        for field in [
            ArticleField::FontFamily(FontFamily::DaysOne),
            ArticleField::FontSize(FontSize::Medium),
            ArticleField::FontColor(FontColor::HotPink),
            ArticleField::BackgroundColor(BackgroundColor::Black),
            ArticleField::ContentWidth(ContentWidth::Wide),
        ] {
            let _ = run(&mut state, ArticleParamsIntent::FieldChanged(field));
        }

        let reduction = run(&mut state, ArticleParamsIntent::Reset);

        assert_eq!(apply_effect(&reduction), Some(ArticleSettings::DEFAULT));
        assert_eq!(state.draft(), &ArticleSettings::DEFAULT);
    }

    #[test]
    fn given_edits_when_submitted_then_commits_accumulated_draft() {
        let mut state = state(OpenStateOwner::Local);
        for field in [
            ArticleField::FontFamily(FontFamily::Ubuntu),
            ArticleField::FontColor(FontColor::Gray),
            ArticleField::FontFamily(FontFamily::Montserrat),
        ] {
            let _ = run(&mut state, ArticleParamsIntent::FieldChanged(field));
        }

        let reduction = run(&mut state, ArticleParamsIntent::Submit);

        let expected = ArticleSettings {
            font_family: FontFamily::Montserrat,
            font_color: FontColor::Gray,
            ..ArticleSettings::DEFAULT
        };
        assert_eq!(reduction.effects, vec![ArticleParamsEffect::Apply(
            expected
        )]);
    }

    #[test]
    fn given_open_sidebar_when_submitted_then_it_stays_open() {
        let mut state = state(OpenStateOwner::Local);
        let _ = run(&mut state, ArticleParamsIntent::TogglePressed);

        let _ = run(&mut state, ArticleParamsIntent::Submit);

        assert!(state.is_open());
    }

    #[test]
    fn given_local_owner_when_toggled_twice_then_grace_timer_is_requested() {
        let mut state = state(OpenStateOwner::Local);

        let opened = run(&mut state, ArticleParamsIntent::TogglePressed);
        let closed = run(&mut state, ArticleParamsIntent::TogglePressed);

        assert_eq!(opened, Reduction::default());
        assert_eq!(closed.hide_after, Some(0));
        assert!(state.is_rendered());
        assert!(!state.is_open());
    }

    #[test]
    fn given_host_owner_when_toggled_then_requests_open_without_opening() {
        let mut state = state(OpenStateOwner::Host);

        let reduction = run(&mut state, ArticleParamsIntent::TogglePressed);

        assert_eq!(reduction.effects, vec![ArticleParamsEffect::RequestOpen]);
        assert_eq!(state.phase(), SidebarPhase::Closed);
    }

    #[test]
    fn given_host_opened_sidebar_when_toggled_then_requests_close() {
        let mut state = state(OpenStateOwner::Host);
        let _ = run(&mut state, ArticleParamsIntent::SyncOpen(true));

        let reduction = run(&mut state, ArticleParamsIntent::TogglePressed);

        assert_eq!(reduction.effects, vec![ArticleParamsEffect::RequestClose]);
        assert!(state.is_open());
    }

    #[test]
    fn given_open_sidebar_when_pressed_inside_then_not_dismissed() {
        let mut state = state(OpenStateOwner::Local);
        let _ = run(&mut state, ArticleParamsIntent::TogglePressed);

        let reduction = press(&mut state, Some(INSIDE));

        assert_eq!(reduction, Reduction::default());
        assert!(state.is_open());
    }

    #[test]
    fn given_open_sidebar_when_pressed_outside_then_dismissed() {
        let mut state = state(OpenStateOwner::Local);
        let _ = run(&mut state, ArticleParamsIntent::TogglePressed);

        let reduction = press(&mut state, Some(OUTSIDE));

        assert_eq!(reduction.hide_after, Some(0));
        assert!(!state.is_open());
    }

    #[test]
    fn given_host_owner_when_pressed_outside_then_requests_close() {
        let mut state = state(OpenStateOwner::Host);
        let _ = run(&mut state, ArticleParamsIntent::SyncOpen(true));

        let reduction = press(&mut state, Some(OUTSIDE));

        assert_eq!(reduction.effects, vec![ArticleParamsEffect::RequestClose]);
    }

    #[test]
    fn given_open_sidebar_when_toggle_pressed_then_press_is_not_outside() {
        let mut state = state(OpenStateOwner::Local);
        let _ = run(&mut state, ArticleParamsIntent::TogglePressed);

        let reduction = press(&mut state, Some(toggle_center(true)));
        assert_eq!(reduction, Reduction::default());
        assert!(state.is_open());

        let toggle = run(&mut state, ArticleParamsIntent::TogglePressed);

        assert_eq!(toggle.hide_after, Some(0));
        assert!(!state.is_open());
    }

    #[test]
    fn given_tracked_cursor_when_pressed_without_position_then_uses_cursor() {
        let mut state = state(OpenStateOwner::Local);
        let _ = run(&mut state, ArticleParamsIntent::TogglePressed);
        let _ = run(&mut state, ArticleParamsIntent::CursorMoved {
            position: OUTSIDE,
        });

        let _ = press(&mut state, None);

        assert!(!state.is_open());
    }

    #[test]
    fn given_unknown_cursor_when_pressed_without_position_then_ignored() {
        let mut state = state(OpenStateOwner::Local);
        let _ = run(&mut state, ArticleParamsIntent::TogglePressed);

        let _ = press(&mut state, None);

        assert!(state.is_open());
    }

    #[test]
    fn given_closed_sidebar_when_pressed_outside_then_nothing_happens() {
        let mut state = state(OpenStateOwner::Local);

        let reduction = press(&mut state, Some(OUTSIDE));

        assert_eq!(reduction, Reduction::default());
        assert_eq!(state.phase(), SidebarPhase::Closed);
    }

    #[test]
    fn given_close_when_reduced_then_single_hide_timer_is_armed() {
        let mut state = state(OpenStateOwner::Local);
        let _task = spawn(&mut state, ArticleParamsIntent::SyncOpen(true));

        let _task = spawn(&mut state, ArticleParamsIntent::SyncOpen(false));

        assert!(state.has_hide_timer());
        assert!(state.has_pending_hide());
    }

    #[test]
    fn given_reopen_before_grace_ends_when_reduced_then_timer_is_cancelled() {
        let mut state = state(OpenStateOwner::Local);
        let _task = spawn(&mut state, ArticleParamsIntent::SyncOpen(true));
        let _task = spawn(&mut state, ArticleParamsIntent::SyncOpen(false));
        let timer = state.hide_timer().cloned().expect("timer should be armed");

        let _task = spawn(&mut state, ArticleParamsIntent::SyncOpen(true));
        let _task = spawn(&mut state, ArticleParamsIntent::GraceElapsed {
            generation: 0,
        });

        assert!(timer.is_aborted());
        assert!(!state.has_hide_timer());
        assert!(state.is_open());
        assert!(state.is_rendered());
    }

    #[test]
    fn given_grace_elapsed_when_reduced_then_sidebar_unmounts() {
        let mut state = state(OpenStateOwner::Local);
        let _task = spawn(&mut state, ArticleParamsIntent::SyncOpen(true));
        let _task = spawn(&mut state, ArticleParamsIntent::SyncOpen(false));

        let _task = spawn(&mut state, ArticleParamsIntent::GraceElapsed {
            generation: 0,
        });

        assert!(!state.is_rendered());
        assert!(!state.has_hide_timer());
    }

    #[test]
    fn given_second_close_when_reduced_then_first_timer_is_aborted() {
        let mut state = state(OpenStateOwner::Local);
        let _task = spawn(&mut state, ArticleParamsIntent::SyncOpen(true));
        let _task = spawn(&mut state, ArticleParamsIntent::SyncOpen(false));
        let first = state.hide_timer().cloned().expect("timer should be armed");
        let _task = spawn(&mut state, ArticleParamsIntent::SyncOpen(true));

        let _task = spawn(&mut state, ArticleParamsIntent::SyncOpen(false));

        let second =
            state.hide_timer().cloned().expect("timer should be re-armed");
        assert!(first.is_aborted());
        assert!(!second.is_aborted());
        assert!(state.has_pending_hide());
    }
}
