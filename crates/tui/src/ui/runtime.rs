//! Runtime: event loop and input routing for the shell.
//!
//! - Owns the terminal lifecycle (alternate screen, raw mode, mouse capture).
//! - Runs a single loop handling input, hover-close deadlines and resize.
//! - Routes events through `ShellView` and applies returned `Effect`s.
//! - Ticks fast only while a hover close deadline is pending, otherwise idles
//!   on a long interval.
//!
//! Input comes from a dedicated task that blocks on `crossterm::event::read`
//! and forwards events over a channel. Keeping `poll()` and `read()` together
//! avoids lost or delayed events in some terminals, and mouse moves are
//! throttled so hover tracking cannot flood the loop.

use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::MouseEventKind;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rat_focus::FocusBuilder;
use ratatui::{Terminal, prelude::*};
use tokio::{
    signal,
    sync::mpsc,
    time::{self, MissedTickBehavior},
};

use crate::app::App;
use crate::ui::main_component::ShellView;
use crate::ui::theme;
use navshell_menu::MenuConfig;
use navshell_types::{Effect, Msg};

/// Spawn a dedicated task that blocks on terminal input and forwards
/// `crossterm` events over a Tokio channel, throttling mouse moves to once
/// per 16 ms.
async fn spawn_input_task() -> mpsc::Receiver<Event> {
    let (sender, receiver) = mpsc::channel(500);
    let mut last_mouse_event: Option<Instant> = Some(Instant::now());

    tokio::spawn(async move {
        let sixteen_ms = Duration::from_millis(16);
        loop {
            if event::poll(sixteen_ms).is_ok() {
                match event::read() {
                    Ok(event) => {
                        let is_mouse_move =
                            event.as_mouse_event().is_some_and(|e| e.kind == MouseEventKind::Moved);
                        let should_send = !is_mouse_move
                            || last_mouse_event.is_some_and(|last| last.elapsed() >= sixteen_ms);
                        if is_mouse_move && should_send {
                            last_mouse_event = Some(Instant::now());
                        }

                        if should_send && let Err(e) = sender.send(event).await {
                            tracing::warn!("Failed to send event: {}", e);
                            break;
                        }
                    }
                    Err(e) => {
                        tracing::warn!("Failed to read event: {}", e);
                        break;
                    }
                }
            }
        }
    });
    receiver
}

/// Put the terminal into raw mode and enter the alternate screen.
fn setup_terminal() -> Result<Terminal<CrosstermBackend<std::io::Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Restore terminal settings and leave the alternate screen.
fn cleanup_terminal(terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;
    Ok(())
}

/// Renders a frame, rebuilding focus first so structural changes (drawer
/// opened, class switched) are reflected in the ring.
fn render(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    app: &mut App,
    shell: &mut ShellView,
) -> Result<()> {
    let old_focus = std::mem::take(&mut app.focus);
    app.focus = FocusBuilder::rebuild_for(app, Some(old_focus));
    if app.focus.focused().is_none() {
        app.restore_focus();
    }
    terminal.draw(|frame| shell.render(frame, frame.area(), app))?;
    Ok(())
}

fn handle_input_event(app: &mut App, shell: &mut ShellView, input_event: Event) -> Vec<Effect> {
    match input_event {
        Event::Key(key_event) => shell.handle_key_events(app, key_event),
        Event::Mouse(mouse_event) => shell.handle_mouse_events(app, mouse_event),
        Event::Resize(width, height) => {
            shell.handle_message(app, &Msg::Resize(width, height));
            Vec::new()
        }
        Event::FocusGained | Event::FocusLost | Event::Paste(_) => Vec::new(),
    }
}

/// Entry point for the shell runtime: sets up the terminal, spawns the input
/// producer, runs the event loop and restores the terminal on exit.
pub async fn run_app(config: Arc<MenuConfig>, initial_path: String) -> Result<()> {
    let mut input_receiver = spawn_input_task().await;
    let mut shell = ShellView::default();

    let (width, _) = crossterm::terminal::size().unwrap_or((120, 40));
    let mut app = App::new(config, theme::load(), initial_path, width);
    let mut terminal = setup_terminal()?;

    // Fast while a hover deadline is pending, slow when idle.
    let fast_interval = Duration::from_millis(50);
    let idle_interval = Duration::from_millis(1000);
    let mut current_interval = idle_interval;
    let mut ticker = time::interval(current_interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    render(&mut terminal, &mut app, &mut shell)?;

    // Last known terminal size, used to synthesize Resize messages for
    // terminals that drop them.
    let mut last_size: Option<(u16, u16)> = crossterm::terminal::size().ok();

    loop {
        let target_interval = if app.needs_animation() { fast_interval } else { idle_interval };
        if target_interval != current_interval {
            current_interval = target_interval;
            ticker = time::interval(current_interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        }

        let mut needs_render = false;
        let mut effects: Vec<Effect> = Vec::new();

        tokio::select! {
            maybe_event = input_receiver.recv() => {
                let Some(event) = maybe_event else {
                    // Input channel closed; shut down cleanly.
                    break;
                };
                if let Event::Key(key_event) = event
                    && key_event.code == KeyCode::Char('c')
                    && key_event.modifiers.contains(KeyModifiers::CONTROL)
                {
                    break;
                }
                effects.extend(handle_input_event(&mut app, &mut shell, event));
                needs_render = true;
            }

            _ = ticker.tick() => {
                needs_render = shell.handle_message(&mut app, &Msg::Tick);
            }

            _ = signal::ctrl_c() => { break; }
        }

        for effect in effects {
            app.apply_effect(effect);
        }
        if app.should_quit {
            break;
        }

        // Detect size changes even when no Resize event arrives.
        if let Ok((w, h)) = crossterm::terminal::size()
            && last_size != Some((w, h))
        {
            last_size = Some((w, h));
            needs_render |= shell.handle_message(&mut app, &Msg::Resize(w, h));
        }

        if needs_render {
            render(&mut terminal, &mut app, &mut shell)?;
        }
    }

    cleanup_terminal(&mut terminal)?;
    Ok(())
}
