// API module entry
// JSON endpoints backing the contact form and the admin dashboard

pub mod admin;
mod body;
pub mod contact;
mod error;
mod types;
