mod tests_end_to_end;
