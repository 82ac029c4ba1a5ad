// End-to-end tests for the News Digest API
//
// A single PostgreSQL testcontainer is shared by the whole suite. Each test
// leases its own database (test_db_<uuid>) from a pool, so tests can run in
// parallel. The news provider and the generative API are replaced by a
// per-test mockito server.

mod test_activity;
mod test_auth;
mod test_health;
