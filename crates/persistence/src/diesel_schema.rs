// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

diesel::table! {
    bookings (booking_id) {
        booking_id -> BigInt,
        guest_name -> Text,
        unit_id -> Text,
        check_in_date -> Text,
        number_of_nights -> Integer,
        check_out_date -> Text,
    }
}
