//! TUI shop view: catalog on the left, cart on the right.
//!
//! Key bindings: j/k or arrows navigate, Tab switches pane, Enter/a adds the
//! selected item, d/x/Delete removes its cart line, c clears the cart,
//! p prints the nota fiscal, q quits.
//!
//! The view owns all state and performs no terminal I/O; `cmd::shop` runs the
//! event loop and hands [`ShopAction`]s back out, which keeps the whole thing
//! testable against synthetic key events.

use carrinho_core::{Cart, Catalog, Receipt};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols::border,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use std::time::{Duration, Instant};

/// Which pane has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pane {
    Catalog,
    Cart,
}

/// What the event loop should do after a key press.
#[derive(Debug)]
pub enum ShopAction {
    None,
    Quit,
    /// Print this receipt. Fire-and-forget: the cart is untouched.
    Print(Receipt),
}

pub struct ShopView {
    catalog: Catalog,
    cart: Cart,
    focus: Pane,
    catalog_state: ListState,
    cart_state: ListState,
    status_msg: Option<(String, Instant)>,
}

impl ShopView {
    #[must_use]
    pub fn new(catalog: Catalog) -> Self {
        let mut catalog_state = ListState::default();
        if !catalog.is_empty() {
            catalog_state.select(Some(0));
        }
        Self {
            catalog,
            cart: Cart::default(),
            focus: Pane::Catalog,
            catalog_state,
            cart_state: ListState::default(),
            status_msg: None,
        }
    }

    #[must_use]
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    #[must_use]
    pub fn focus(&self) -> Pane {
        self.focus
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> ShopAction {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => ShopAction::Quit,
            KeyCode::Char('j') | KeyCode::Down => {
                self.select_next();
                ShopAction::None
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.select_prev();
                ShopAction::None
            }
            KeyCode::Tab | KeyCode::Left | KeyCode::Right => {
                self.toggle_focus();
                ShopAction::None
            }
            KeyCode::Enter | KeyCode::Char('a') => {
                self.add_selected();
                ShopAction::None
            }
            KeyCode::Char('d') | KeyCode::Char('x') | KeyCode::Delete => {
                self.remove_selected();
                ShopAction::None
            }
            KeyCode::Char('c') => {
                self.cart.clear();
                self.cart_state.select(None);
                self.set_status("Carrinho esvaziado".to_string());
                ShopAction::None
            }
            KeyCode::Char('p') => {
                ShopAction::Print(Receipt::from_cart(self.catalog.title(), &self.cart))
            }
            _ => ShopAction::None,
        }
    }

    pub fn set_status(&mut self, msg: String) {
        self.status_msg = Some((msg, Instant::now()));
    }

    /// Id of the item the focused pane points at.
    fn selected_id(&self) -> Option<u32> {
        match self.focus {
            Pane::Catalog => self
                .catalog_state
                .selected()
                .and_then(|i| self.catalog.items().get(i))
                .map(|item| item.id),
            Pane::Cart => self
                .cart_state
                .selected()
                .and_then(|i| self.cart.lines().get(i))
                .map(|line| line.item.id),
        }
    }

    fn add_selected(&mut self) {
        let Some(id) = self.selected_id() else {
            return;
        };
        if self.cart.add(&self.catalog, id) {
            if self.cart_state.selected().is_none() {
                self.cart_state.select(Some(0));
            }
            let quantity = self.cart.quantity_of(id).unwrap_or(0);
            self.set_status(format!("Adicionado ({quantity}x)"));
        }
    }

    fn remove_selected(&mut self) {
        let Some(id) = self.selected_id() else {
            return;
        };
        if self.cart.remove(id) {
            self.set_status("Removido".to_string());
        }
        self.clamp_cart_selection();
    }

    fn clamp_cart_selection(&mut self) {
        let len = self.cart.len();
        if len == 0 {
            self.cart_state.select(None);
        } else if let Some(i) = self.cart_state.selected() {
            if i >= len {
                self.cart_state.select(Some(len - 1));
            }
        }
    }

    fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Pane::Catalog => Pane::Cart,
            Pane::Cart => Pane::Catalog,
        };
        if self.focus == Pane::Cart && self.cart_state.selected().is_none() && !self.cart.is_empty()
        {
            self.cart_state.select(Some(0));
        }
    }

    fn focused_len(&self) -> usize {
        match self.focus {
            Pane::Catalog => self.catalog.len(),
            Pane::Cart => self.cart.len(),
        }
    }

    fn focused_state(&mut self) -> &mut ListState {
        match self.focus {
            Pane::Catalog => &mut self.catalog_state,
            Pane::Cart => &mut self.cart_state,
        }
    }

    fn select_next(&mut self) {
        let len = self.focused_len();
        if len == 0 {
            return;
        }
        let state = self.focused_state();
        let i = state
            .selected()
            .map_or(0, |i| if i + 1 >= len { 0 } else { i + 1 });
        state.select(Some(i));
    }

    fn select_prev(&mut self) {
        let len = self.focused_len();
        if len == 0 {
            return;
        }
        let state = self.focused_state();
        let i = state
            .selected()
            .map_or(0, |i| if i == 0 { len - 1 } else { i - 1 });
        state.select(Some(i));
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(3)])
            .split(area);

        let panes = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(chunks[0]);

        self.render_catalog(frame, panes[0]);
        self.render_cart(frame, panes[1]);
        self.render_status(frame, chunks[1]);
    }

    fn render_catalog(&mut self, frame: &mut Frame, area: Rect) {
        let items: Vec<ListItem> = self
            .catalog
            .iter()
            .map(|item| {
                let marker = self
                    .cart
                    .quantity_of(item.id)
                    .map_or_else(String::new, |q| format!("  ×{q}"));
                ListItem::new(Line::from(vec![
                    Span::styled(format!("{:>3}  ", item.id), Style::default().fg(Color::Cyan)),
                    Span::raw(item.title.clone()),
                    Span::styled(
                        format!("  {}", item.price),
                        Style::default().fg(Color::Yellow),
                    ),
                    Span::styled(marker, Style::default().fg(Color::Green)),
                ]))
            })
            .collect();

        let list = List::new(items)
            .block(pane_block(
                format!(" {} ", self.catalog.title()),
                self.focus == Pane::Catalog,
            ))
            .highlight_style(
                Style::default()
                    .add_modifier(Modifier::BOLD)
                    .bg(Color::DarkGray),
            )
            .highlight_symbol("► ");

        frame.render_stateful_widget(list, area, &mut self.catalog_state);
    }

    fn render_cart(&mut self, frame: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(3)])
            .split(area);

        let items: Vec<ListItem> = if self.cart.is_empty() {
            vec![ListItem::new(Span::styled(
                "(vazio)",
                Style::default().fg(Color::DarkGray),
            ))]
        } else {
            self.cart
                .lines()
                .iter()
                .map(|line| {
                    ListItem::new(Line::from(vec![
                        Span::raw(line.item.title.clone()),
                        Span::styled(
                            format!("  {}x", line.quantity),
                            Style::default().fg(Color::Cyan),
                        ),
                        Span::styled(
                            format!("  {}", line.subtotal()),
                            Style::default().fg(Color::Yellow),
                        ),
                    ]))
                })
                .collect()
        };

        let list = List::new(items)
            .block(pane_block(
                " Carrinho de Compras ".to_string(),
                self.focus == Pane::Cart,
            ))
            .highlight_style(
                Style::default()
                    .add_modifier(Modifier::BOLD)
                    .bg(Color::DarkGray),
            )
            .highlight_symbol("► ");

        frame.render_stateful_widget(list, chunks[0], &mut self.cart_state);

        let total = Paragraph::new(Line::from(vec![
            Span::styled("Total: ", Style::default().add_modifier(Modifier::BOLD)),
            Span::styled(
                self.cart.total().to_string(),
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
        ]))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_set(border::ROUNDED)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
        frame.render_widget(total, chunks[1]);
    }

    fn render_status(&self, frame: &mut Frame, area: Rect) {
        let key_style = Style::default().fg(Color::Yellow);
        let mut spans = vec![
            Span::styled("j/k", key_style),
            Span::raw(" navigate  "),
            Span::styled("Tab", key_style),
            Span::raw(" pane  "),
            Span::styled("Enter", key_style),
            Span::raw(" add  "),
            Span::styled("d", key_style),
            Span::raw(" remove  "),
            Span::styled("c", key_style),
            Span::raw(" clear  "),
            Span::styled("p", key_style),
            Span::raw(" print  "),
            Span::styled("q", key_style),
            Span::raw(" quit"),
        ];

        if let Some((msg, at)) = &self.status_msg {
            if at.elapsed() < Duration::from_secs(3) {
                spans.push(Span::raw("  |  "));
                spans.push(Span::styled(msg.clone(), Style::default().fg(Color::Cyan)));
            }
        }

        let p = Paragraph::new(Line::from(spans)).block(Block::default().borders(Borders::ALL));
        frame.render_widget(p, area);
    }
}

fn pane_block(title: String, focused: bool) -> Block<'static> {
    let border_style = if focused {
        Style::default().fg(Color::Green)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    Block::default()
        .borders(Borders::ALL)
        .border_set(border::ROUNDED)
        .border_style(border_style)
        .title(title)
}
