// This file makes the page modules available to the rest of the application.

pub mod home;
pub mod portfolio;
