mod game_vm;

pub use game_vm::{GameIntent, GameScreenVm, NoticeVm, ScreenMode, map_game_screen};
