mod end_to_end;
mod round_trip;
