use crossterm::event::{self, Event, KeyEventKind};
use menu_core::{update, BrowseState, Msg};
use menu_logging::{menu_info, menu_trace};

use super::config::load_config;
use super::effects::EffectRunner;
use super::logging;
use super::ui::constants::INPUT_POLL;
use super::ui::input::{map_key, move_cursor, Action};
use super::ui::{render, terminal};

pub fn run_app() -> anyhow::Result<()> {
    let cwd = std::env::current_dir()?;
    let config = load_config(&cwd)?;
    logging::initialize(
        &cwd.join(&config.log_file),
        menu_logging::parse_level(&config.log_level),
    );
    menu_info!("Starting menu browser against {}", config.base_url);

    let runner = EffectRunner::new(config.catalog_settings())?;
    let (state, effects) = menu_core::init(config.browse_settings());
    runner.run(effects);

    let mut tui = terminal::enter()?;
    let result = event_loop(&mut tui, state, &runner);
    terminal::leave(&mut tui)?;
    menu_info!("Menu browser closed");
    result
}

fn dispatch(state: BrowseState, msg: Msg, runner: &EffectRunner) -> BrowseState {
    menu_trace!("dispatch {:?}", msg);
    let (state, effects) = update(state, msg);
    runner.run(effects);
    state
}

fn event_loop(
    tui: &mut terminal::Tui,
    mut state: BrowseState,
    runner: &EffectRunner,
) -> anyhow::Result<()> {
    let mut cursor = 0;
    let mut redraw = true;
    loop {
        for msg in runner.drain() {
            state = dispatch(state, msg, runner);
        }

        let view = state.view();
        cursor = move_cursor(cursor, 0, view.cards.len());
        if state.consume_dirty() || redraw {
            tui.draw(|frame| render::render(frame, &view, cursor))?;
            redraw = false;
        }

        if !event::poll(INPUT_POLL)? {
            continue;
        }
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                match map_key(key, &view, cursor) {
                    Action::Quit => return Ok(()),
                    Action::Dispatch(msg) => {
                        if matches!(msg, Msg::CategorySelected(_) | Msg::SearchEdited(_)) {
                            cursor = 0;
                        }
                        state = dispatch(state, msg, runner);
                    }
                    Action::MoveCursor(delta) => {
                        cursor = move_cursor(cursor, delta, view.cards.len());
                        redraw = true;
                    }
                    Action::Ignore => {}
                }
            }
            Event::Resize(..) => redraw = true,
            _ => {}
        }
    }
}
