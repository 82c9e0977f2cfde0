mod ping;
mod scan;
