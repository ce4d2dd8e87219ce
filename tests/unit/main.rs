mod greedy_fill_tests;
