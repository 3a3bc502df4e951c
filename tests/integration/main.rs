mod chat_flow;
mod helpers;
mod scrolling;
mod side_panel;
