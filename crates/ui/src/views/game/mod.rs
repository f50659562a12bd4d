mod effects;
mod view;

pub use view::GameView;

#[cfg(test)]
pub(crate) use view::GameTestHandles;
