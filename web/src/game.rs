use apagao_core::{ActivateOutcome, CellCount, Coord, Coord2, Grid, PuzzleConfig, PuzzleEngine};
use gloo::timers::callback::{Interval, Timeout};
use web_time::Instant;
use yew::prelude::*;

use crate::settings::{Settings, SettingsView};
use crate::utils::*;

/// Frozen moves/time pair shown in the win dialog.
#[derive(Copy, Clone, Debug, PartialEq)]
struct SolveSummary {
    moves: u32,
    secs: u32,
}

/// One puzzle instance from scramble to solve.
///
/// Owns the engine, the starting-layout snapshot, the move counter, and the
/// start instant. "New puzzle" is construction; "reset" restores the
/// snapshot without re-scrambling.
struct PuzzleSession {
    engine: PuzzleEngine,
    start: Grid,
    seed: u64,
    moves: u32,
    started_at: Instant,
    summary: Option<SolveSummary>,
}

impl PuzzleSession {
    fn new(config: PuzzleConfig, seed: u64) -> Self {
        let mut engine =
            PuzzleEngine::new(config.size).expect("clamped config sizes are always valid");
        engine.scramble(config.steps, seed);
        let start = engine.snapshot();
        Self {
            engine,
            start,
            seed,
            moves: 0,
            started_at: Instant::now(),
            summary: None,
        }
    }

    /// Restores the starting layout of this same puzzle and restarts the
    /// move counter and the clock.
    fn reset(&mut self) {
        if let Err(err) = self.engine.restore(&self.start) {
            log::error!("could not restore starting layout: {}", err);
            return;
        }
        self.moves = 0;
        self.started_at = Instant::now();
        self.summary = None;
    }

    /// Forwards an activation to the engine, counting accepted moves.
    ///
    /// Returns `None` when the engine rejected the input; the grid and the
    /// move counter are untouched in that case. Clicking past the solve is
    /// allowed (free play) but the recorded summary stays frozen.
    fn activate(&mut self, coords: Coord2) -> Option<ActivateOutcome> {
        match self.engine.activate(coords) {
            Ok(outcome) => {
                self.moves += 1;
                if outcome.is_solved() && self.summary.is_none() {
                    self.summary = Some(SolveSummary {
                        moves: self.moves,
                        secs: self.running_secs(),
                    });
                }
                Some(outcome)
            }
            Err(err) => {
                log::warn!("rejected activation at {:?}: {}", coords, err);
                None
            }
        }
    }

    fn size(&self) -> Coord {
        self.engine.size()
    }

    fn cell_at(&self, coords: Coord2) -> bool {
        self.engine.cell_at(coords)
    }

    fn moves(&self) -> u32 {
        self.moves
    }

    fn running_secs(&self) -> u32 {
        self.started_at.elapsed().as_secs() as u32
    }

    /// Elapsed seconds for display; frozen at the solve once there is one.
    fn elapsed_secs(&self) -> u32 {
        self.summary
            .map_or_else(|| self.running_secs(), |summary| summary.secs)
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) enum Msg {
    Activate(Coord2),
    UpdateTime,
    NewPuzzle,
    ResetPuzzle,
    ToggleSettings,
    UpdateSettings(Settings),
    CloseWin,
    CopyShareLink,
    ResetShareLabel,
}

#[derive(Properties, Clone, PartialEq)]
struct CellProps {
    row: Coord,
    col: Coord,
    lit: bool,
    on_activate: Callback<Coord2>,
}

/// One grid cell. Knows nothing about the engine; it only reports its
/// position through the callback.
#[function_component(Cell)]
fn cell_component(props: &CellProps) -> Html {
    let CellProps {
        row,
        col,
        lit,
        on_activate,
    } = props.clone();
    let class = classes!("cell", if lit { "on" } else { "off" });
    let onclick = Callback::from(move |_: MouseEvent| {
        log::trace!("({}, {}) clicked", row, col);
        on_activate.emit((row, col));
    });

    html! {
        <td>
            <button
                {class}
                {onclick}
                aria-label={format!("Row {}, Col {}", row + 1, col + 1)}
            />
        </td>
    }
}

pub(crate) struct GameView {
    settings: Settings,
    session: PuzzleSession,
    prev_time: u32,
    settings_open: bool,
    win_open: bool,
    share_copied: bool,
    timer: Option<Interval>,
    _share_label_reset: Option<Timeout>,
}

#[derive(Properties, Clone, PartialEq)]
pub(crate) struct GameProps {
    /// Grid size from a share link, if any.
    #[prop_or_default]
    pub size: Option<Coord>,
    /// Scramble steps from a share link, if any.
    #[prop_or_default]
    pub steps: Option<CellCount>,
    /// Seed from a share link; present iff the link pins the exact layout.
    #[prop_or_default]
    pub seed: Option<u64>,
}

impl GameView {
    fn create_timer(ctx: &Context<Self>) -> Interval {
        let link = ctx.link().clone();
        Interval::new(250, move || link.send_message(Msg::UpdateTime))
    }

    fn start_puzzle(&mut self, ctx: &Context<Self>, seed: u64) {
        log::debug!(
            "new puzzle: size={}, steps={}, seed={}",
            self.settings.puzzle.size,
            self.settings.puzzle.steps,
            seed
        );
        self.session = PuzzleSession::new(self.settings.puzzle, seed);
        self.win_open = false;
        self.share_copied = false;
        self.timer = Some(Self::create_timer(ctx));
    }

    fn share_url(&self) -> String {
        let href = gloo::utils::window()
            .location()
            .href()
            .unwrap_or_default();
        let base = href.split('#').next().unwrap_or("");
        format!(
            "{}#--size={}&--steps={}&--seed={}",
            base, self.settings.puzzle.size, self.settings.puzzle.steps, self.session.seed
        )
    }

    fn win_dialog(&self, ctx: &Context<Self>) -> Html {
        let summary = self.session.summary.unwrap_or(SolveSummary {
            moves: self.session.moves(),
            secs: self.session.elapsed_secs(),
        });
        let share_label = if self.share_copied {
            "Link copied!"
        } else {
            "Copy share link"
        };
        let cb_play_again = ctx.link().callback(|_| Msg::NewPuzzle);
        let cb_close = ctx.link().callback(|_| Msg::CloseWin);
        let cb_share = ctx.link().callback(|_| Msg::CopyShareLink);

        html! {
            <Modal>
                <dialog id="win" open={self.win_open}>
                    <article>
                        <h2>{"Solved!"}</h2>
                        <p>
                            {format!(
                                "{} moves in {}",
                                summary.moves,
                                format_clock(summary.secs)
                            )}
                        </p>
                        <footer>
                            <button onclick={cb_share}>{share_label}</button>
                            <button onclick={cb_play_again}>{"Play again"}</button>
                            <button type="reset" onclick={cb_close}>{"Close"}</button>
                        </footer>
                    </article>
                </dialog>
            </Modal>
        }
    }
}

impl Component for GameView {
    type Message = Msg;
    type Properties = GameProps;

    fn create(ctx: &Context<Self>) -> Self {
        let props = ctx.props();
        let defaults = PuzzleConfig::default();
        let settings = Settings {
            puzzle: PuzzleConfig::new(
                props.size.unwrap_or(defaults.size),
                props.steps.unwrap_or(defaults.steps),
            ),
        };
        let seed = props.seed.unwrap_or_else(js_random_seed);
        let mut view = Self {
            settings,
            session: PuzzleSession::new(settings.puzzle, seed),
            prev_time: 0,
            settings_open: false,
            win_open: false,
            share_copied: false,
            timer: None,
            _share_label_reset: None,
        };
        view.timer = Some(Self::create_timer(ctx));
        view
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        use Msg::*;

        match msg {
            Activate(coords) => match self.session.activate(coords) {
                None => false,
                Some(outcome) => {
                    if outcome.is_solved() && self.timer.is_some() {
                        // cancel the running refresh task before showing the
                        // summary so the frozen time cannot tick on
                        self.timer = None;
                        self.win_open = true;
                    }
                    true
                }
            },
            UpdateTime => {
                let time = self.session.elapsed_secs();
                if self.prev_time != time {
                    self.prev_time = time;
                    true
                } else {
                    false
                }
            }
            NewPuzzle => {
                self.start_puzzle(ctx, js_random_seed());
                true
            }
            ResetPuzzle => {
                self.session.reset();
                self.win_open = false;
                self.timer = Some(Self::create_timer(ctx));
                true
            }
            ToggleSettings => {
                self.settings_open = !self.settings_open;
                true
            }
            UpdateSettings(settings) => {
                self.settings = settings;
                self.settings_open = false;
                self.start_puzzle(ctx, js_random_seed());
                true
            }
            CloseWin => {
                self.win_open = false;
                true
            }
            CopyShareLink => {
                let url = self.share_url();
                log::debug!("share url: {}", url);
                let _ = gloo::utils::window()
                    .navigator()
                    .clipboard()
                    .write_text(&url);
                self.share_copied = true;
                let link = ctx.link().clone();
                self._share_label_reset = Some(Timeout::new(1200, move || {
                    link.send_message(Msg::ResetShareLabel)
                }));
                true
            }
            ResetShareLabel => {
                self.share_copied = false;
                self._share_label_reset = None;
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        use Msg::*;

        let size = self.session.size();
        let moves = format_for_counter(self.session.moves() as i32);
        let elapsed_time = format_clock(self.session.elapsed_secs());
        let cb_new_puzzle = ctx.link().callback(|_| NewPuzzle);
        let cb_reset = ctx.link().callback(|_| ResetPuzzle);
        let cb_show_settings = ctx.link().callback(|_| ToggleSettings);
        let cb_apply_settings = ctx.link().callback(UpdateSettings);
        let cb_cancel_settings = ctx.link().callback(|_| ToggleSettings);

        html! {
            <div class="apagao">
                <small onclick={cb_show_settings}>{"···"}</small>
                <nav>
                    <aside>{moves}</aside>
                    <span>
                        <button onclick={cb_new_puzzle}>{"New"}</button>
                        <button onclick={cb_reset}>{"Reset"}</button>
                    </span>
                    <aside>{elapsed_time}</aside>
                </nav>
                <table>
                    {
                        for (0..size).map(|row| html! {
                            <tr>
                                {
                                    for (0..size).map(|col| {
                                        let lit = self.session.cell_at((row, col));
                                        let on_activate = ctx.link().callback(Activate);
                                        html! {
                                            <Cell {row} {col} {lit} {on_activate}/>
                                        }
                                    })
                                }
                            </tr>
                        })
                    }
                </table>
                { self.win_dialog(ctx) }
                <SettingsView
                    open={self.settings_open}
                    settings={self.settings}
                    on_apply={cb_apply_settings}
                    on_cancel={cb_cancel_settings}
                />
            </div>
        }
    }
}
