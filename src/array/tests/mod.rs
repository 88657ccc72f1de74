mod append;
mod clone;
mod insertion;
