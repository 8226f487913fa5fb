pub mod app;
pub mod blocks;
pub mod button;
pub mod footer;

pub use app::render_screen;
pub use blocks::render_block;
pub use button::render_button;
pub use footer::render_footer;
