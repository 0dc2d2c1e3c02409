mod property_tests;
mod smoke_tests;

// This file organizes the integration tests into a cohesive test suite.
// Each module tests a specific aspect of the client:
// - smoke_tests: Basic functionality tests to ensure nothing is broken
// - property_tests: Generated inputs for the time and interval helpers
// - api_mock: A local HTTP server standing in for the salon API
