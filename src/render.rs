use impl_helper::ImplHelper;
use ratatui::Frame;
use wrap_context::raw_context;

pub trait Render {
    fn render(&mut self, frame: &mut Frame);
}

/// Keeps a view in sync with the model it is drawn from
#[derive(Debug, Default, ImplHelper)]
pub struct ViewModel<V, M> {
    view: V,

    #[helper(get)]
    model: M,
}

impl<V, M> ViewModel<V, M>
where
    V: for<'a> From<&'a M>,
{
    pub fn with_model_mut<F>(&mut self, f: F) -> anyhow::Result<()>
    where
        F: FnOnce(&mut M) -> anyhow::Result<()>,
    {
        raw_context!(f(&mut self.model))?;
        self.view = V::from(&self.model);
        anyhow::Ok(())
    }

    #[must_use = "method moves the value of self and returns the modified value"]
    pub fn model_set(mut self, model: M) -> Self {
        self.model = model;
        self.view = V::from(&self.model);
        self
    }
}

impl<V, M> Render for ViewModel<V, M>
where
    V: Render,
{
    fn render(&mut self, frame: &mut Frame) {
        self.view.render(frame);
    }
}
