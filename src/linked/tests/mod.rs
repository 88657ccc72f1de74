mod insertion;
mod iterator;
