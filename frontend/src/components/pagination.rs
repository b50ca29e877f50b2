use common::pagination::page_count;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PaginationProps {
    pub total: usize,
    pub page_size: usize,
    /// 1-based index of the page currently shown.
    pub current: usize,
    pub on_select: Callback<usize>,
}

/// Numbered page links, one per page of the full result set.
pub struct Pagination;

impl Component for Pagination {
    type Message = ();
    type Properties = PaginationProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Pagination
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let pages = page_count(props.total, props.page_size);
        html! {
            <nav>
                <ul class="pagination">
                    { for (1..=pages).map(|number| {
                        let on_select = props.on_select.clone();
                        let class = if number == props.current {
                            "page-item active"
                        } else {
                            "page-item"
                        };
                        let onclick = Callback::from(move |e: MouseEvent| {
                            e.prevent_default();
                            on_select.emit(number);
                        });
                        html! {
                            <li key={number.to_string()} class={class}>
                                <a href="#" class="page-link" {onclick}>{ number }</a>
                            </li>
                        }
                    }) }
                </ul>
            </nav>
        }
    }
}
