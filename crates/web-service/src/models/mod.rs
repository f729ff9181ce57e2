pub mod contact;

pub mod err;
