mod participation_request;
