mod dispatch;

pub use dispatch::{dispatch, render_prompt};
