pub mod uv_helper;
