//! Tests for motion module
