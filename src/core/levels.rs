use crate::core::consts::LEVEL_COUNT;
use crate::core::navigation::clamp_catalog_index;

/// The built-in levels, easiest first.
pub static LEVELS: [&[&str]; LEVEL_COUNT] = [
    &[
        "#####",
        "# #.#",
        "# $ #",
        "# @ #",
        "#####",
    ],
    &[
        "######",
        "#    #",
        "#  $ #",
        "#. @##",
        "######",
    ],
    &[
        "#####",
        "#  @#",
        "# $.#",
        "#####",
    ],
    &[
        "#####",
        "#.  #",
        "#@$ #",
        "##  #",
        "#####",
    ],
    &[
        "#####",
        "#@  #",
        "#.$ #",
        "#####",
    ],
    &[
        "#####",
        "# $.#",
        "#  @#",
        "#####",
    ],
    &[
        "#######",
        "#  . @#",
        "# $   #",
        "#  #  #",
        "#######",
    ],
    &[
        "#######",
        "#  #  #",
        "#   $ #",
        "#.  $ #",
        "#. #@ #",
        "#######",
    ],
    &[
        "#######",
        "#   . #",
        "#@$ $ #",
        "#  ## #",
        "#   . #",
        "#######",
    ],
    &[
        "######",
        "#    #",
        "# $ @#",
        "#.#$ #",
        "#   .#",
        "######",
    ],
    &[
        "#######",
        "#  #@##",
        "#. $$ #",
        "# .#  #",
        "#     #",
        "#######",
    ],
    &[
        "######",
        "# . @#",
        "# $$ #",
        "# .  #",
        "######",
    ],
    &[
        "#######",
        "#  ####",
        "#  $  #",
        "#..#$ #",
        "##  @ #",
        "#######",
    ],
    &[
        "#######",
        "#    .#",
        "# $  .#",
        "# $  @#",
        "#  #  #",
        "#######",
    ],
    &[
        "#######",
        "#  #  #",
        "#  * @#",
        "# #$  #",
        "#   . #",
        "#######",
    ],
    &[
        "########",
        "#   ####",
        "##   ###",
        "# $  $ #",
        "# @ .. #",
        "########",
    ],
    &[
        "#######",
        "#  .. #",
        "# $   #",
        "#   # #",
        "# $#  #",
        "##@# ##",
        "#######",
    ],
    &[
        "########",
        "##    .#",
        "## # * #",
        "#  $ # #",
        "#    $ #",
        "# #. @ #",
        "########",
    ],
    &[
        "########",
        "#@ #  ##",
        "# $ .$ #",
        "#      #",
        "# $  #.#",
        "#. #   #",
        "########",
    ],
    &[
        "########",
        "#@. #  #",
        "#. $ $ #",
        "#    $ #",
        "#  #.  #",
        "########",
    ],
    &[
        "########",
        "# #  ###",
        "#..  $ #",
        "##  #  #",
        "# *# $ #",
        "## @   #",
        "########",
    ],
    &[
        "#########",
        "#   #  .#",
        "#   #$$ #",
        "#@   .  #",
        "##   #$.#",
        "#       #",
        "#########",
    ],
    &[
        "#########",
        "# #   . #",
        "#     $.#",
        "# $  #  #",
        "# $    .#",
        "# # #  ##",
        "##     @#",
        "#########",
    ],
    &[
        "########",
        "#  @  ##",
        "##$ #$ #",
        "#. #   #",
        "#.  $  #",
        "# .    #",
        "########",
    ],
    &[
        "##########",
        "#     .. #",
        "# *# $ # #",
        "#    #   #",
        "# ### $###",
        "#   #   @#",
        "##########",
    ],
    &[
        "##########",
        "#. @ .   #",
        "# $##    #",
        "# .   $  #",
        "# $#     #",
        "##       #",
        "##########",
    ],
    &[
        "#########",
        "#    # .#",
        "# # # $ #",
        "#  @  # #",
        "##  .   #",
        "##. $#$ #",
        "#       #",
        "#########",
    ],
    &[
        "#########",
        "#   #.  #",
        "#  # $# #",
        "# #  *  #",
        "# $.  $ #",
        "#@ # .  #",
        "#########",
    ],
    &[
        "##########",
        "#     .  #",
        "#   #$*#@#",
        "#  #.    #",
        "## ##$# ##",
        "#        #",
        "#* # #   #",
        "##########",
    ],
    &[
        "#########",
        "#  #    #",
        "#    @  #",
        "## # # ##",
        "# ##  #.#",
        "#*  #$ *#",
        "###     #",
        "# *     #",
        "#########",
    ],
    &[
        "##########",
        "#@$ . . .#",
        "#$$ #  #$#",
        "#    ##  #",
        "# #  #  ##",
        "#     #  #",
        "#.#      #",
        "#        #",
        "##########",
    ],
    &[
        "###########",
        "#  #      #",
        "# #      ##",
        "# @ ##$# ##",
        "#  #.     #",
        "# #  .#.$ #",
        "# # *$#   #",
        "# #   #  ##",
        "###########",
    ],
    &[
        "##########",
        "#    .$@##",
        "# ##$ #$ #",
        "#  #.#.  #",
        "#     ## #",
        "#  ##    #",
        "##  *    #",
        "##########",
    ],
    &[
        "###########",
        "#   .     #",
        "# #  $##  #",
        "# .#*@#   #",
        "# $  #*   #",
        "#     #   #",
        "#  #      #",
        "#  #      #",
        "###########",
    ],
    &[
        "##########",
        "#     .  #",
        "# $# ##  #",
        "#      # #",
        "# #@     #",
        "#  #  #$ #",
        "# $* # .##",
        "#.  #   ##",
        "##########",
    ],
    &[
        "##########",
        "#  #  #  #",
        "# . $ *# #",
        "#        #",
        "#        #",
        "#       ##",
        "# $    # #",
        "#   . ## #",
        "#  @  $. #",
        "##########",
    ],
    &[
        "############",
        "#. $       #",
        "##     #   #",
        "#@#        #",
        "#$# ##$    #",
        "#    # ##  #",
        "#.#   .    #",
        "##    $.   #",
        "############",
    ],
    &[
        "############",
        "# #  #     #",
        "#       #  #",
        "#          #",
        "# .      # #",
        "# #   .    #",
        "# * * $#   #",
        "###$*      #",
        "#@  #      #",
        "############",
    ],
    &[
        "###########",
        "#    $.   #",
        "#         #",
        "#  ##*    #",
        "# $.*     #",
        "#   #    ##",
        "# #     #.#",
        "#        $#",
        "#       #@#",
        "###########",
    ],
    &[
        "############",
        "#       .$ #",
        "#    #* #$ #",
        "#   #@# .  #",
        "# #        #",
        "# .     ## #",
        "# $#   #   #",
        "# $.    #  #",
        "############",
    ],
    &[
        "############",
        "#@## # #   #",
        "#$ #   $.  #",
        "#. .$      #",
        "# #   $ . ##",
        "#    # # # #",
        "#  #*   #  #",
        "#          #",
        "#          #",
        "############",
    ],
    &[
        "############",
        "## # @   . #",
        "##* ### #$ #",
        "#   # ##   #",
        "#*     #$###",
        "###   # .  #",
        "#        # #",
        "#   ## $  .#",
        "#         ##",
        "############",
    ],
    &[
        "###########",
        "#@$ .  $. #",
        "# #    ## #",
        "####*     #",
        "#      #  #",
        "#  # #    #",
        "#   #   #*#",
        "##  $.#   #",
        "###########",
    ],
    &[
        "###########",
        "#    # @# #",
        "#*.##   # #",
        "#* ##     #",
        "## $    . #",
        "#   #     #",
        "# $ # $ # #",
        "#.        #",
        "###########",
    ],
    &[
        "############",
        "##.#@#  #  #",
        "#  $ *.$ * #",
        "#   #    # #",
        "# #  # #   #",
        "#     $   ##",
        "###     #. #",
        "##     #   #",
        "###     #  #",
        "############",
    ],
    &[
        "###########",
        "##@#    * #",
        "#*$   #   #",
        "#  ##    ##",
        "#.   ## ###",
        "#   #    .#",
        "##    $ #$#",
        "#    .    #",
        "###########",
    ],
    &[
        "############",
        "#   .    . #",
        "#  #$    $ #",
        "#    #     #",
        "#$#.$@## # #",
        "#  ##* #   #",
        "#.    #  # #",
        "## #       #",
        "############",
    ],
    &[
        "###########",
        "## .$@# # #",
        "# .# $# * #",
        "##$ #    .#",
        "##      # #",
        "# $#      #",
        "# .  ###$ #",
        "# #   # . #",
        "###########",
    ],
    &[
        "###########",
        "#  *  #   #",
        "# *   #.$ #",
        "#    #   ##",
        "# *##    ##",
        "##   #  #@#",
        "# #  * #  #",
        "#.      $ #",
        "###########",
    ],
    &[
        "###########",
        "# .       #",
        "#  *  #   #",
        "## # #    #",
        "# $  #   ##",
        "#    #$ * #",
        "#     .#.##",
        "#       $ #",
        "#     ##@*#",
        "###########",
    ],
];

/// Rows of the level at `index`, clamped into the catalog range.
pub fn level_rows(index: usize) -> &'static [&'static str] {
    LEVELS[clamp_catalog_index(index)]
}
