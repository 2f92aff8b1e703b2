use yew::{classes, html, Component, Context, Html, Properties};

/// Sliding panel on the right edge of the map page. The `show` class drives
/// the CSS transition.
pub struct SideSheet;

#[derive(Properties, PartialEq)]
pub struct Props {
    #[prop_or_default]
    pub children: Html,
    pub open: bool,
}

impl Component for SideSheet {
    type Message = ();
    type Properties = Props;

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        html! {
            <aside class={classes!("side-sheet", props.open.then_some("show"))}>
                if props.open {
                    { props.children.clone() }
                }
            </aside>
        }
    }
}
