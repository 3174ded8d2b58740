//! Unit tests for mail relays
