pub mod participation_request;
