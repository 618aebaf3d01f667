

// Value model tests
mod fuzzy;
