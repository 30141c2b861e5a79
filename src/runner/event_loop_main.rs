use crate::app::settings::Settings;
use crate::app::App;
use crate::input::{poll, read_event, InputEvent};
use crate::runner::handlers;
use crate::runner::terminal::{init_terminal, restore_terminal, Tui};
use crate::ui;

use std::time::{Duration, Instant};

pub fn run_app(settings: Settings) -> anyhow::Result<()> {
    ui::colors::set_theme(&settings.theme);
    let mut app = App::new(settings);

    let mut terminal = init_terminal()?;
    // Restore the terminal even when the loop fails, then report the error.
    let result = event_loop(&mut terminal, &mut app);
    restore_terminal(terminal)?;
    if result.is_ok() {
        // Tear down whatever demo is still mounted so its lifecycle completes.
        app.navigate(crate::app::Route::Home);
    }
    result
}

fn event_loop(terminal: &mut Tui, app: &mut App) -> anyhow::Result<()> {
    let tick = Duration::from_millis(app.settings.tick_ms.max(10));
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|f| ui::ui(f, app))?;

        let timeout = tick.saturating_sub(last_tick.elapsed());
        if poll(timeout)? {
            match read_event()? {
                InputEvent::Key(key) => {
                    if handlers::handle_key(app, key)? {
                        break;
                    }
                }
                InputEvent::Resize(_, _) => { /* redraw on next loop */ }
                InputEvent::Other => {}
            }
        }
        if last_tick.elapsed() >= tick {
            app.tick();
            last_tick = Instant::now();
        }
    }
    Ok(())
}
