pub mod date_buttons;
pub mod dialogs;
pub mod menu_bar;
pub mod theme;
