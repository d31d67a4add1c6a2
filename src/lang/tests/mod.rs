mod verb_test;
