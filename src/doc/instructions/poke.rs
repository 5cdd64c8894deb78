/*!
# `POKE`

## Purpose
Shuffle the queue into a random order.

## Remarks
Every value stays in the queue. Each `POKE` is seeded from the clock
unless qu was started with `--seed`, which makes runs repeatable.
*/
