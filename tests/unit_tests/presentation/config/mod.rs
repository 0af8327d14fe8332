mod environment_test;
