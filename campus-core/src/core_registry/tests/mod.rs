/*
    Integration tests for core_registry subsystem

    Test suite covering:
    - Store behavior that spans record families
    - Registry orchestration and association bookkeeping
    - Known one-sided writes and their observable effects
    - Concurrent access through a shared registry
    - Randomized property checks
*/
