// Integration test helpers live in tests/; nothing to export.
