use impl_helper::ImplHelper;
use itertools::Itertools;
use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
};

use pageslider::utils::clip_string;

pub type Span = (String, Style);

#[derive(Default, Debug, ImplHelper)]
pub struct TextLineModel {
    #[helper(get /* set is custom */)]
    area: Rect,

    #[helper(/* set is custom */)]
    spans: Vec<Span>,

    #[helper(get)]
    show_spans: Vec<Span>,

    #[helper(all)]
    style: Style,

    #[helper(all)]
    alignment: Alignment,
}

impl TextLineModel {
    // The whole line shares the area width, spans past it are clipped or dropped
    fn make_show_spans(&mut self) {
        let mut budget = usize::from(self.area.width);

        self.show_spans = self
            .spans
            .iter()
            .map_while(|(content, style)| {
                if budget == 0 {
                    return None;
                }

                let content = clip_string(content.clone(), "…", budget);
                budget = budget.saturating_sub(content.chars().count());

                Some((content, *style))
            })
            .collect_vec();
    }

    #[must_use = "method moves the value of self and returns the modified value"]
    pub fn area_set(mut self, value: Rect) -> Self {
        self.area_update(value);
        self
    }

    pub fn area_update(&mut self, value: Rect) -> &mut Self {
        self.area = value;
        self.make_show_spans();
        self
    }

    #[must_use = "method moves the value of self and returns the modified value"]
    pub fn spans_set(mut self, value: Vec<Span>) -> Self {
        self.spans_update(value);
        self
    }

    pub fn spans_update(&mut self, value: Vec<Span>) -> &mut Self {
        self.spans = value;
        self.make_show_spans();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn contents(model: &TextLineModel) -> Vec<&str> {
        model
            .show_spans()
            .iter()
            .map(|(content, _)| content.as_str())
            .collect_vec()
    }

    #[test]
    fn spans_share_the_line_width() {
        let model = TextLineModel::default()
            .spans_set(vec![
                (" 1 ".to_string(), Style::default()),
                (" 2 ".to_string(), Style::default()),
                (" 3 ".to_string(), Style::default()),
            ])
            .area_set(Rect::new(0, 0, 7, 1));

        assert_eq!(contents(&model), vec![" 1 ", " 2 ", "…"]);
    }

    #[test]
    fn zero_width_shows_nothing() {
        let model = TextLineModel::default()
            .area_set(Rect::default())
            .spans_set(vec![(" 1 ".to_string(), Style::default())]);

        assert!(model.show_spans().is_empty());
    }
}
