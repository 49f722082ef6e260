pub mod circular;
pub mod error;
pub mod export;
pub mod io;
pub mod nt;
pub mod params;
pub mod segment;
pub mod tm;
pub mod window;
