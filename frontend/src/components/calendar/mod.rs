mod model;

pub use model::{MonthView, Selection};

use crate::components::imports::*;
use chrono::{Datelike, NaiveDate};

const WEEKDAYS: [&str; 7] = ["일", "월", "화", "수", "목", "금", "토"];

/// Month grid for picking the days a class runs on.
///
/// Click toggles a day; shift-click adds every day between the last clicked
/// one and this one. Days before today cannot be picked.
pub struct Calendar {
    view: MonthView,
    selection: Selection,
}

#[derive(Properties, PartialEq)]
pub struct Props {
    #[prop_or_default]
    pub selected: Vec<NaiveDate>,
    pub onchange: Callback<Vec<NaiveDate>>,
}

pub enum Msg {
    PrevMonth,
    NextMonth,
    Pick { date: NaiveDate, extend: bool },
}

fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

impl Component for Calendar {
    type Message = Msg;
    type Properties = Props;

    fn create(ctx: &Context<Self>) -> Self {
        let selection = Selection::from_dates(ctx.props().selected.iter().copied());
        let first = selection.dates().first().copied().unwrap_or_else(today);
        Self {
            view: MonthView::of(first),
            selection,
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, _old_props: &Self::Properties) -> bool {
        if ctx.props().selected != self.selection.dates() {
            self.selection = Selection::from_dates(ctx.props().selected.iter().copied());
            return true;
        }
        false
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let wrapper_style = css!(
            "
            width: 384px;
            padding: 16px;
            border: 1px solid #e5e5e5;
            border-radius: 8px;
            user-select: none;
        "
        );

        let header_style = css!(
            "
            display: flex;
            justify-content: space-between;
            align-items: center;
            margin-bottom: 12px;
            font-weight: 700;

            button {
                border: none;
                background: none;
                font-size: 18px;
                cursor: pointer;
            }
        "
        );

        let grid_style = css!(
            "
            display: grid;
            grid-template-columns: repeat(7, 1fr);
            gap: 4px;
            text-align: center;

            .weekday {
                font-size: 12px;
                color: #999999;
            }

            .day {
                height: 40px;
                line-height: 40px;
                border-radius: 50%;
                cursor: pointer;
            }

            .day.selected {
                background-color: #f28316;
                color: #ffffff;
            }

            .day.past {
                color: #cccccc;
                cursor: default;
            }
        "
        );

        let today = today();
        let onprev = ctx.link().callback(|_: MouseEvent| Msg::PrevMonth);
        let onnext = ctx.link().callback(|_: MouseEvent| Msg::NextMonth);

        let cells = self.view.grid().into_iter().enumerate().map(|(i, cell)| {
            let Some(date) = cell else {
                return html! { <div key={format!("blank-{}", i)}/> };
            };

            let past = date < today;
            let onclick = (!past).then(|| {
                ctx.link().callback(move |event: MouseEvent| Msg::Pick {
                    date,
                    extend: event.shift_key(),
                })
            });
            let class = classes!(
                "day",
                self.selection.contains(date).then_some("selected"),
                past.then_some("past"),
            );

            html! {
                <div key={date.to_string()} {class} {onclick}>{ date.day() }</div>
            }
        });

        html! {
            <div class={wrapper_style}>
                <div class={header_style}>
                    <button type="button" onclick={onprev}>{ "‹" }</button>
                    <span>{ format!("{}년 {}월", self.view.year(), self.view.month()) }</span>
                    <button type="button" onclick={onnext}>{ "›" }</button>
                </div>
                <div class={grid_style}>
                    { for WEEKDAYS.iter().map(|w| html! { <div class="weekday">{ *w }</div> }) }
                    { for cells }
                </div>
            </div>
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::PrevMonth => {
                self.view = self.view.prev();
                true
            }
            Msg::NextMonth => {
                self.view = self.view.next();
                true
            }
            Msg::Pick { date, extend } => {
                if extend {
                    self.selection.extend_to(date);
                } else {
                    self.selection.toggle(date);
                }
                ctx.props().onchange.emit(self.selection.dates());
                true
            }
        }
    }
}
