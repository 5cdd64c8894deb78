/*!
# `RET`

## Purpose
End the program, exiting with the front value.

## Remarks
An empty queue is `RETURN FROM EMPTY QUEUE`. A string at the front is
`NON-INTEGER RETURN VALUE`.
*/
