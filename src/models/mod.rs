pub mod response;
pub mod rsvp;
