use std::rc::Rc;
use yew::prelude::*;

use crate::models::station::Station;
use crate::services::panels::pile_status_counts;

#[derive(Properties, PartialEq)]
pub struct PileTableProps {
    pub station: Rc<Station>,
}

#[function_component(PileTable)]
pub fn pile_table(props: &PileTableProps) -> Html {
    let piles = &props.station.piles;

    html! {
        <div class="panel-block pile-table">
            <h3>{format!("终端设备详情列表 ({})", piles.len())}</h3>
            <div class="pile-counts">
                { for pile_status_counts(&props.station).into_iter().map(|(status, count)| html! {
                    <span class={classes!("pile-status", status.css_class())}>
                        {format!("{} {}", status.label(), count)}
                    </span>
                }) }
            </div>
            <div class="table-scroll">
                <table>
                    <thead>
                        <tr>
                            <th>{"编号"}</th>
                            <th>{"类型"}</th>
                            <th>{"状态"}</th>
                            <th>{"当前用户"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        { for piles.iter().map(|pile| html! {
                            <tr key={pile.id.clone()}>
                                <td class="mono">{&pile.id}</td>
                                <td>{pile.pile_type.label()}</td>
                                <td>
                                    <span class={classes!("pile-status", pile.status.css_class())}>
                                        {pile.status.label()}
                                    </span>
                                </td>
                                <td class="mono muted">{pile.current_user.as_deref().unwrap_or("-")}</td>
                            </tr>
                        }) }
                    </tbody>
                </table>
            </div>
        </div>
    }
}
