//! `carrinho shop` — interactive catalog + cart session.
//!
//! Owns the terminal: raw mode + alternate screen around the event loop, with
//! the view itself kept I/O-free in `tui::shop`. One crossterm event is
//! handled at a time; each intent runs to completion before the next is read.

use crate::tui::shop::{ShopAction, ShopView};
use anyhow::{Context, Result};
use carrinho_core::{Catalog, Receipt};
use clap::Args;
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use std::io::Stdout;
use std::time::Duration;

#[derive(Args, Debug, Default)]
pub struct ShopArgs {}

type Term = Terminal<CrosstermBackend<Stdout>>;

/// Run `carrinho shop`: take over the terminal until the user quits.
///
/// # Errors
///
/// Returns an error if the terminal cannot be put into (or restored from)
/// raw mode, or if drawing fails.
pub fn run_shop(_args: &ShopArgs, catalog: &Catalog) -> Result<()> {
    let mut view = ShopView::new(catalog.clone());

    let mut terminal = setup_terminal()?;
    let result = event_loop(&mut terminal, &mut view);
    restore_terminal(&mut terminal)?;
    result
}

fn event_loop(terminal: &mut Term, view: &mut ShopView) -> Result<()> {
    loop {
        terminal.draw(|frame| view.render(frame, frame.area()))?;

        if !event::poll(Duration::from_millis(250)).context("poll terminal events")? {
            continue;
        }
        let Event::Key(key) = event::read().context("read terminal event")? else {
            continue;
        };
        // Windows delivers release events too; act on presses only.
        if key.kind != KeyEventKind::Press {
            continue;
        }

        match view.handle_key(key) {
            ShopAction::None => {}
            ShopAction::Quit => return Ok(()),
            ShopAction::Print(receipt) => {
                print_receipt(terminal, &receipt)?;
                view.set_status("Nota fiscal impressa".to_string());
            }
        }
    }
}

/// Write the receipt into the normal screen buffer so it survives the
/// session, then resume the view. The cart is not touched.
fn print_receipt(terminal: &mut Term, receipt: &Receipt) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    print!("{}", receipt.render_text());
    enable_raw_mode()?;
    execute!(terminal.backend_mut(), EnterAlternateScreen)?;
    terminal.clear()?;
    Ok(())
}

fn setup_terminal() -> Result<Term> {
    enable_raw_mode().context("enable raw mode")?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen).context("enter alternate screen")?;
    Terminal::new(CrosstermBackend::new(stdout)).context("create terminal")
}

fn restore_terminal(terminal: &mut Term) -> Result<()> {
    disable_raw_mode().context("disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen).context("leave alternate screen")?;
    terminal.show_cursor().context("show cursor")?;
    Ok(())
}
