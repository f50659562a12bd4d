use dioxus::prelude::*;
use dioxus_router::Routable;

use crate::views::GameView;

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/", GameView)] Game {},
}
