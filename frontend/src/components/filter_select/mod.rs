use common::model::select_option::SelectOption;
use web_sys::HtmlSelectElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct FilterSelectProps {
    pub id: AttrValue,
    pub label: AttrValue,
    /// Text of the leading "no filter" option. `None` when `options` already
    /// contains one.
    #[prop_or_default]
    pub placeholder: Option<AttrValue>,
    pub options: Vec<SelectOption>,
    pub value: String,
    pub onchange: Callback<String>,
}

/// A labelled `<select>` whose value is owned by the parent.
pub struct FilterSelect;

impl Component for FilterSelect {
    type Message = ();
    type Properties = FilterSelectProps;

    fn create(_ctx: &Context<Self>) -> Self {
        FilterSelect
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let onchange = props.onchange.reform(|e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            select.value()
        });

        html! {
            <label class="filter" for={props.id.clone()}>
                <span class="filter-label">{ props.label.clone() }</span>
                <select id={props.id.clone()} {onchange}>
                    {
                        if let Some(placeholder) = &props.placeholder {
                            html! { <option value="" selected={props.value.is_empty()}>{ placeholder.clone() }</option> }
                        } else {
                            html! {}
                        }
                    }
                    { for props.options.iter().map(|option| html! {
                        <option value={option.value.clone()} selected={option.value == props.value}>
                            { option.label.clone() }
                        </option>
                    }) }
                </select>
            </label>
        }
    }
}
