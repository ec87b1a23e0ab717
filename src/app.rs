use ratatui::{
    backend::Backend,
    layout::{Alignment, Constraint, Layout, Rect, Size},
    style::{Color, Style},
    Frame,
};
use wrap_context::{arg_context, raw_context};

use pageslider::{
    Direction, Labels, LinkDescriptor, LinkUrls, Page, PageState, Pagination, Preferences,
    QueryPageUrl, RequestedPage, WindowRenderer,
};

use crate::{
    event::Event,
    handler::handle_key_events,
    pager_line::pager_spans,
    render::{Render, ViewModel},
    textline_model::{Span, TextLineModel},
    textline_view::TextLineView,
    tui::Tui,
};

pub fn paginate(
    state: &PageState,
    preferences: &Preferences,
    page_url: &QueryPageUrl,
) -> anyhow::Result<Pagination> {
    let urls = raw_context!(LinkUrls::new(page_url, preferences.query()))?;

    anyhow::Ok(
        WindowRenderer::new(*state)
            .next_rule_set(*preferences.next_rule())
            .render(&urls),
    )
}

/// Pager line in the middle of the screen, status line at the bottom
fn split_area(terminal_size: Size) -> [Rect; 2] {
    let terminal_area = Rect::new(0, 0, terminal_size.width, terminal_size.height);

    let [_, pager_area, _, status_area] = Layout::vertical([
        Constraint::Min(0),
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(terminal_area);

    [pager_area, status_area]
}

#[derive(Debug)]
pub struct App {
    running: bool,
    total_items: usize,
    preferences: Preferences,
    page_url: QueryPageUrl,
    labels: Labels,

    state: PageState,
    pagination: Pagination,
    input: String,

    pager_textline: ViewModel<TextLineView<'static>, TextLineModel>,
    status_textline: ViewModel<TextLineView<'static>, TextLineModel>,
}

impl App {
    pub fn new(
        terminal_size: Size,
        total_items: usize,
        preferences: Preferences,
        page_url: QueryPageUrl,
        state: PageState,
    ) -> anyhow::Result<Self> {
        let [pager_area, status_area] = split_area(terminal_size);

        let pagination = arg_context!(paginate(&state, &preferences, &page_url))?;

        let pager_textline = ViewModel::default().model_set(
            TextLineModel::default()
                .area_set(pager_area)
                .alignment_set(Alignment::Center),
        );

        let status_textline = ViewModel::default().model_set(
            TextLineModel::default()
                .area_set(status_area)
                .style_set(Style::default().bg(Color::Rgb(80, 73, 69)))
                .alignment_set(Alignment::Left),
        );

        let mut app = Self {
            running: true,
            total_items,
            preferences,
            page_url,
            labels: Labels::plain(),
            state,
            pagination,
            input: String::default(),
            pager_textline,
            status_textline,
        };

        arg_context!(app.refresh_lines())?;

        anyhow::Ok(app)
    }

    pub async fn run<B: Backend>(&mut self, tui: &mut Tui<B>) -> anyhow::Result<()> {
        while self.running {
            raw_context!(tui.draw(self))?;

            match raw_context!(tui.events.next().await)? {
                Event::Tick => {}
                Event::Key(key_event) => raw_context!(handle_key_events(key_event, self))?,
                Event::Resize(width, height) => {
                    arg_context!(self.resize(Size::new(width, height)))?
                }
            }
        }

        anyhow::Ok(())
    }

    pub fn quit(&mut self) {
        self.running = false;
    }

    pub fn state(&self) -> &PageState {
        &self.state
    }

    pub fn current_url(&self) -> anyhow::Result<String> {
        let urls = raw_context!(LinkUrls::new(&self.page_url, self.preferences.query()))?;

        anyhow::Ok(urls.url(*self.state.current_page()))
    }

    pub fn print(&self) -> anyhow::Result<()> {
        println!("{}", arg_context!(self.current_url())?);
        anyhow::Ok(())
    }

    /// Every move is a new request: the page goes through resolution again
    fn move_to<'a>(&mut self, requested: impl Into<RequestedPage<'a>>) -> anyhow::Result<()> {
        self.state = PageState::resolve(requested, self.total_items, *self.preferences.per_page());
        self.pagination = arg_context!(paginate(&self.state, &self.preferences, &self.page_url))?;

        arg_context!(self.refresh_lines())?;

        anyhow::Ok(())
    }

    pub fn go(&mut self, direction: Direction) -> anyhow::Result<()> {
        let control = match direction {
            Direction::Previous => self.pagination.previous(),
            Direction::Next => self.pagination.next(),
        };

        if let LinkDescriptor::Nav {
            target_page: Some(target_page),
            ..
        } = control
        {
            let target_page: Page = *target_page;
            arg_context!(self.move_to(target_page))?;
        }

        anyhow::Ok(())
    }

    pub fn first_page(&mut self) -> anyhow::Result<()> {
        arg_context!(self.move_to(RequestedPage::Number(1)))
    }

    pub fn last_page(&mut self) -> anyhow::Result<()> {
        let last_page = *self.state.last_page();
        arg_context!(self.move_to(last_page))
    }

    pub fn input_push(&mut self, ch: char) -> anyhow::Result<()> {
        self.input.push(ch);
        arg_context!(self.refresh_status())
    }

    pub fn input_pop(&mut self) -> anyhow::Result<()> {
        self.input.pop();
        arg_context!(self.refresh_status())
    }

    pub fn input_submit(&mut self) -> anyhow::Result<()> {
        let input = std::mem::take(&mut self.input);
        arg_context!(self.move_to(input.as_str()))
    }

    pub fn resize(&mut self, terminal_size: Size) -> anyhow::Result<()> {
        let [pager_area, status_area] = split_area(terminal_size);

        raw_context!(self.pager_textline.with_model_mut(|model| {
            model.area_update(pager_area);
            anyhow::Ok(())
        }))?;
        raw_context!(self.status_textline.with_model_mut(|model| {
            model.area_update(status_area);
            anyhow::Ok(())
        }))?;

        anyhow::Ok(())
    }

    fn status_spans(&self) -> anyhow::Result<Vec<Span>> {
        let status = format!(
            " page {} of {} | {} items, {} per page | {}",
            self.state.current_page(),
            self.state.last_page(),
            self.state.total_items(),
            self.state.per_page(),
            arg_context!(self.current_url())?,
        );

        let mut spans = vec![(status, Style::default())];

        if !self.input.is_empty() {
            spans.push((
                format!(" | go to: {}", self.input),
                Style::default().fg(Color::Yellow),
            ));
        }

        anyhow::Ok(spans)
    }

    fn refresh_status(&mut self) -> anyhow::Result<()> {
        let spans = arg_context!(self.status_spans())?;

        raw_context!(self.status_textline.with_model_mut(|model| {
            model.spans_update(spans);
            anyhow::Ok(())
        }))
    }

    fn refresh_lines(&mut self) -> anyhow::Result<()> {
        let spans = pager_spans(&self.pagination, &self.labels);

        raw_context!(self.pager_textline.with_model_mut(|model| {
            model.spans_update(spans);
            anyhow::Ok(())
        }))?;

        arg_context!(self.refresh_status())
    }
}

impl Render for App {
    fn render(&mut self, frame: &mut Frame) {
        self.pager_textline.render(frame);
        self.status_textline.render(frame);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn app(total_items: usize, page: &str) -> App {
        let preferences = Preferences::default().per_page_set(10);
        let state = PageState::resolve(page, total_items, *preferences.per_page());

        App::new(
            Size::new(80, 24),
            total_items,
            preferences,
            QueryPageUrl::new("/items", "page"),
            state,
        )
        .unwrap()
    }

    #[test]
    fn navigation_moves_between_neighbours() {
        let mut app = app(200, "5");

        app.go(Direction::Next).unwrap();
        assert_eq!(*app.state().current_page(), 6);

        app.go(Direction::Previous).unwrap();
        app.go(Direction::Previous).unwrap();
        assert_eq!(*app.state().current_page(), 4);
    }

    #[test]
    fn navigation_stops_at_both_ends() {
        let mut app = app(30, "1");

        app.go(Direction::Previous).unwrap();
        assert_eq!(*app.state().current_page(), 1);

        app.last_page().unwrap();
        app.go(Direction::Next).unwrap();
        assert_eq!(*app.state().current_page(), 3);

        app.first_page().unwrap();
        assert_eq!(*app.state().current_page(), 1);
    }

    #[test]
    fn typed_pages_are_resolved_like_requests() {
        let mut app = app(200, "1");

        for ch in "12".chars() {
            app.input_push(ch).unwrap();
        }
        app.input_submit().unwrap();
        assert_eq!(*app.state().current_page(), 12);

        for ch in "999".chars() {
            app.input_push(ch).unwrap();
        }
        app.input_submit().unwrap();
        assert_eq!(*app.state().current_page(), 20);

        for ch in "2.5".chars() {
            app.input_push(ch).unwrap();
        }
        app.input_submit().unwrap();
        assert_eq!(*app.state().current_page(), 1);
    }

    #[test]
    fn current_url_uses_the_page_key() {
        let app = app(200, "7");

        assert_eq!(app.current_url().unwrap(), "/items?page=7");
    }
}
