/*!
# `SORTUP`, `SORTDOWN`

## Purpose
Sort the queue ascending or descending.

## Remarks
Integers come before strings in both directions. Strings compare byte by
byte. Equal values keep their order.
*/
