mod telegram_tests;
