use yew::prelude::*;

use station_dashboard::components::{Header, LeftPanel, MapView, RightPanel, TimelineBar};
use station_dashboard::hooks::use_navigation::use_navigation;
use station_dashboard::hooks::use_timeline::use_timeline;
use station_dashboard::models::district::TimeMode;

#[function_component(App)]
fn app() -> Html {
    let navigation = use_navigation();
    let timeline = use_timeline();
    let time_mode = use_state(TimeMode::default);

    let on_time_mode = {
        let time_mode = time_mode.clone();
        Callback::from(move |mode| time_mode.set(mode))
    };

    html! {
        <div class="app-container">
            <Header />

            <main class="app-main">
                <section class="side-column">
                    <LeftPanel view={navigation.view.clone()} />
                </section>

                <section class="center-column">
                    <MapView
                        view={navigation.view.clone()}
                        stations={navigation.stations.clone()}
                        time_mode={*time_mode}
                        {on_time_mode}
                        on_action={navigation.dispatch.clone()}
                        on_back={navigation.back.clone()}
                    />
                    <TimelineBar handle={timeline} />
                </section>

                <section class="side-column">
                    <RightPanel view={navigation.view.clone()} time_mode={*time_mode} />
                </section>
            </main>

            <style>
                {include_str!("style.css")}
            </style>
        </div>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
