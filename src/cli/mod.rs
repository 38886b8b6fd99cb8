pub mod io;
pub mod menus;
pub mod output;
pub mod table;
