use std::io;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event as CEvent, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::mpsc;

use parley::app::App;
use parley::constants::{LOG_DIR, REPLY_DELAY_MS, TICK_MS};
use parley::key_handlers::handle_key;
use parley::reply::{IncomingReply, ReplyScheduler};
use parley::storage::StateStore;
use parley::{logging, ui};

/// Enum for the event loop's two input sources besides replies.
enum Event {
    Input(CEvent),
    Tick,
}

#[tokio::main]
async fn main() -> Result<()> {
    let store = StateStore::open_default()?;
    let _logger = logging::init(&store.dir().join(LOG_DIR))?;

    let (scheduler, replies) = ReplyScheduler::new(Duration::from_millis(REPLY_DELAY_MS));
    let mut app = App::new(store, scheduler)?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut app, replies).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res
}

/// Main loop of the application.
async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    mut replies: mpsc::UnboundedReceiver<IncomingReply>,
) -> Result<()> {
    let (tx, mut rx) = mpsc::channel::<Event>(100);

    // Spawn a task to read user input and emit ticks
    tokio::spawn(async move {
        let mut last_tick = Instant::now();
        loop {
            let timeout = Duration::from_millis(100);
            if event::poll(timeout).unwrap_or(false) {
                if let Ok(ev) = event::read() {
                    if tx.send(Event::Input(ev)).await.is_err() {
                        return;
                    }
                }
            }

            if last_tick.elapsed() >= Duration::from_millis(TICK_MS) {
                if tx.send(Event::Tick).await.is_err() {
                    return;
                }
                last_tick = Instant::now();
            }
        }
    });

    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        tokio::select! {
            Some(ev) = rx.recv() => match ev {
                Event::Input(CEvent::Key(key)) => {
                    if key.kind == KeyEventKind::Press {
                        handle_key(app, key);
                    }
                }
                Event::Input(_) => {}
                Event::Tick => app.update_spinner(),
            },
            Some(reply) = replies.recv() => app.deliver_reply(reply),
            else => break,
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
