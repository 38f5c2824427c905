mod app;
mod auth;
mod components;
mod conf;
mod graphql;
mod router;
mod sdk;
mod switch;

use gloo_console as console;
use std::rc::Rc;

fn main() -> anyhow::Result<()> {
    let env = conf::Env::derive()?;
    let conf = conf::Conf::derive(env)?;
    console::log!(format!(
        "starting in {} env, graphql at {}",
        env.as_ref(),
        conf.graphql.endpoint
    ));

    yew::Renderer::<app::App>::with_props(app::Props {
        conf: Rc::new(conf),
    })
    .render();

    Ok(())
}
