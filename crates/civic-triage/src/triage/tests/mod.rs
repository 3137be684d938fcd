mod classification;
mod common;
mod routing;
