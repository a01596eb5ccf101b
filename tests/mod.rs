
// This file organizes the integration tests into a cohesive test suite.
// Each module tests a specific aspect of the application:
// - calendar_mock: Mocking the calendar sink for testing without the real API
// - sync_flow: End-to-end sync runs from schedule table to recorded events
